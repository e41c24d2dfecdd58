//! Worker-side catalog loading.
//!
//! [`CatalogWorker`] holds no Zellij types; the plugin binary wraps it in the
//! `ZellijWorker` implementation and forwards raw payloads to
//! [`CatalogWorker::on_payload`].
//!
//! # Message Flow
//!
//! ```text
//! plugin ── LoadCatalog { source, trace_context } ──▶ worker
//!                                                      │ open source
//!                                                      │ parse document
//!                                                      │ validate records
//! plugin ◀── CatalogLoaded { recipes, skipped } ───────┘
//!        ◀── Error { message }  (source unreadable or not an array)
//! ```

use crate::catalog::{Catalog, RecipeSource, SourceSpec};
use crate::domain::error::Result;
use crate::worker::{decode, encode, WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Name the worker is registered under, and the name its replies carry.
pub const WORKER_NAME: &str = "catalog";

/// Worker thread state.
///
/// Stateless between messages: each load reads the source afresh.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogWorker {
    /// Number of load requests served, for logs.
    #[serde(skip)]
    loads: usize,
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Sets up tracing on the worker thread once per worker lifetime.
fn init_worker_tracing() {
    if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
        crate::observability::init_tracing(&crate::Config::default());
    }
}

impl CatalogWorker {
    /// Logs the outcome of a load and turns it into a response.
    ///
    /// # Parameters
    ///
    /// * `operation` - Name used in logs and as the error message prefix
    /// * `result` - Outcome of the operation
    /// * `on_success` - Builds the response from the successful value
    ///
    /// # Returns
    ///
    /// The response from `on_success`, or [`WorkerResponse::Error`] carrying
    /// `"{operation}: {error}"`.
    fn handle_load_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "worker operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Opens `source` and loads it into a catalog response.
    fn handle_load_catalog(&mut self, source: &SourceSpec) -> WorkerResponse {
        self.loads += 1;
        let source = source.open();
        tracing::debug!(source = %source.describe(), load = self.loads, "loading catalog");

        Self::handle_load_result("load catalog", load_from(source.as_ref()), |(catalog, skipped)| {
            tracing::info!(recipes = catalog.len(), skipped, "catalog loaded");
            WorkerResponse::CatalogLoaded {
                recipes: catalog.all_recipes().to_vec(),
                skipped,
            }
        })
    }

    /// Reconnects worker spans to the plugin span that sent `message`.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one message.
    ///
    /// Worker spans are parented on the trace context the message carries,
    /// when it carries one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::catalog::SourceSpec;
    /// use recipe_explorer::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
    ///
    /// let mut worker = CatalogWorker::default();
    /// let response = worker.handle_message(WorkerMessage::load_catalog(SourceSpec::Embedded));
    /// assert!(matches!(response, WorkerResponse::CatalogLoaded { skipped: 0, .. }));
    /// ```
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { source, .. } => self.handle_load_catalog(&source),
        }
    }

    /// Decodes a JSON payload, processes it and encodes the reply.
    ///
    /// Returns `None` when there is nothing to send back (the request itself
    /// could not be decoded, or the reply could not be encoded).
    pub fn on_payload(&mut self, payload: &str) -> Option<String> {
        init_worker_tracing();

        let message: WorkerMessage = match decode(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);

        match encode(&response) {
            Ok(reply) => Some(reply),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker response");
                None
            }
        }
    }
}

/// Reads a source and validates its records into a catalog.
///
/// Returns the catalog and the total number of records dropped, whether they
/// failed to parse or failed validation.
fn load_from(source: &dyn RecipeSource) -> Result<(Catalog, usize)> {
    let _span = tracing::debug_span!("load_from_source").entered();

    let batch = source.load()?;
    let rejected = batch.rejected;
    let (catalog, invalid) = Catalog::from_records(batch.records);
    Ok((catalog, rejected + invalid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(worker: &mut CatalogWorker, source: SourceSpec) -> WorkerResponse {
        worker.handle_message(WorkerMessage::LoadCatalog {
            source,
            trace_context: None,
        })
    }

    #[test]
    fn loads_embedded_dataset() {
        let mut worker = CatalogWorker::default();
        match load(&mut worker, SourceSpec::Embedded) {
            WorkerResponse::CatalogLoaded { recipes, skipped } => {
                assert!(recipes.len() >= 9);
                assert_eq!(skipped, 0);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn counts_every_dropped_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "title": "Toast", "time": 5}},
                {{"id": 1, "title": "Toast again", "time": 5}},
                {{"id": 2, "title": "Nothing", "time": 0}},
                {{"id": 3, "time": 5}},
                {{"id": "4", "title": "Tea", "time": 3, "categories": ["Drinks"]}}
            ]"#
        )
        .unwrap();

        let mut worker = CatalogWorker::default();
        let source = SourceSpec::File(file.path().display().to_string());
        match load(&mut worker, source) {
            WorkerResponse::CatalogLoaded { recipes, skipped } => {
                let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
                assert_eq!(titles, vec!["Toast", "Tea"]);
                assert_eq!(skipped, 3);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unreadable_source_is_an_error_response() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceSpec::File(dir.path().join("missing.json").display().to_string());

        let response = load(&mut CatalogWorker::default(), source);
        assert!(matches!(response, WorkerResponse::Error { ref message } if message.starts_with("load catalog")));
    }

    #[test]
    fn payload_round_trip() {
        let mut worker = CatalogWorker::default();
        let request = serde_json::to_string(&WorkerMessage::load_catalog(SourceSpec::Embedded)).unwrap();

        let reply = worker.on_payload(&request).unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert!(matches!(response, WorkerResponse::CatalogLoaded { .. }));

        assert!(worker.on_payload("not json").is_none());
    }
}
