//! Tracing with file-based OTLP export.
//!
//! `tracing` spans are bridged into OpenTelemetry and written as OTLP JSON
//! lines to `~/.local/share/zellij/recipe-explorer/recipe-explorer-otlp.json`:
//!
//! ```text
//! tracing → tracing-opentelemetry → TracerProvider → FileSpanExporter → file
//! ```
//!
//! The plugin and its worker run on separate threads with separate
//! subscribers. Both call [`init_tracing`]; the worker reattaches the plugin's
//! trace context carried in each message so the two halves join into one
//! trace.
//!
//! The filter comes from the `trace_level` configuration option and defaults
//! to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// Service and instrumentation scope name on exported spans.
pub(crate) const SERVICE_NAME: &str = "recipe-explorer";
