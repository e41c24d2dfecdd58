//! Worker thread message types for cross-thread communication.
//!
//! The plugin asks the worker to load the catalog once at startup; the worker
//! answers with the validated recipes or an error. Messages travel as JSON and
//! carry the sender's trace context so worker spans join the plugin trace.

use crate::catalog::SourceSpec;
use crate::domain::error::{RecipeExplorerError, Result};
use crate::domain::Recipe;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span ids of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry context is active, e.g.
    /// before tracing is initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { source: SourceSpec }),
}

/// Messages sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read, parse and validate the recipe dataset.
    LoadCatalog {
        source: SourceSpec,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The dataset loaded. Invalid records were dropped.
    CatalogLoaded {
        /// Valid recipes in dataset order.
        recipes: Vec<Recipe>,

        /// Number of records dropped as malformed, invalid or duplicate.
        skipped: usize,
    },

    /// The dataset could not be loaded at all.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

/// Serializes a message or response into a plugin message payload.
///
/// # Errors
///
/// Returns [`RecipeExplorerError::Worker`] if serialization fails.
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| RecipeExplorerError::Worker(format!("encode payload: {e}")))
}

/// Deserializes a plugin message payload.
///
/// # Errors
///
/// Returns [`RecipeExplorerError::Worker`] if the payload is not valid JSON
/// for `T`.
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| RecipeExplorerError::Worker(format!("decode payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_tracing_has_no_context() {
        let message = WorkerMessage::load_catalog(SourceSpec::Embedded);
        assert_eq!(message.trace_context(), None);

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
    }

    #[test]
    fn context_survives_the_wire() {
        let message = WorkerMessage::LoadCatalog {
            source: SourceSpec::File("/host/recipes.json".to_string()),
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                parent_span_id: "b7ad6b7169203331".to_string(),
            }),
        };
        let json = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn undecodable_payload_is_a_worker_error() {
        let err = decode::<WorkerResponse>("{\"CatalogLoaded\": 3}").unwrap_err();
        assert!(matches!(err, RecipeExplorerError::Worker(ref m) if m.starts_with("decode payload")));
    }
}
