//! OpenTelemetry tracer provider backed by a file exporter.
//!
//! The plugin sandbox has no network access, so spans are written as OTLP
//! JSON lines to a rotating file under the plugin data directory. Each line
//! is a complete `resourceSpans` document that OTLP tooling can ingest.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// File-based OpenTelemetry span exporter.
///
/// Writes each exported batch as one OTLP JSON line. Empty batches write
/// nothing.
#[derive(Debug)]
struct FileSpanExporter {
    /// Rotating trace file.
    writer: FileWriter,

    /// Turns span batches into OTLP JSON, stamped with the resource.
    formatter: SpanFormatter,

    /// Set by `shutdown`; later exports fail.
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    /// Creates an exporter writing to `file_path`.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Path of the JSON trace file, opened on first export
    /// * `resource` - Resource attributes (`service.name`, `service.version`)
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Formats and writes `batch` synchronously.
    ///
    /// # Returns
    ///
    /// - `Ok(())` when the batch was written, or was empty
    /// - `Err(TraceError)` after shutdown or when the write fails
    fn export_now(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        if batch.is_empty() {
            return Ok(());
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    /// Exports a batch of spans to the trace file.
    ///
    /// The write happens before the future is returned; the future is
    /// already resolved.
    ///
    /// # Parameters
    ///
    /// * `batch` - Spans finished since the previous export
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(std::future::ready(self.export_now(&batch)))
    }

    /// Marks the exporter shut down. The file handle is released on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Replaces the resource stamped on subsequent batches.
    fn set_resource(&mut self, resource: &Resource) {
        self.formatter = SpanFormatter::new(resource.clone());
    }
}

/// Builds a provider that exports every span synchronously to `file_path`.
///
/// Uses the simple (unbatched) processor; the plugin runtime has no
/// background threads to flush a batch processor.
///
/// # Parameters
///
/// * `file_path` - Path of the JSON trace file
/// * `resource` - Resource attributes shared by every exported span
///
/// # Returns
///
/// A `TracerProvider` ready to back a `tracing-opentelemetry` layer.
///
/// # Example
///
/// ```rust
/// use opentelemetry::KeyValue;
/// use opentelemetry_sdk::resource::Resource;
/// use std::path::PathBuf;
///
/// let resource = Resource::new(vec![KeyValue::new("service.name", "recipe-explorer")]);
/// let provider = create_tracer_provider(PathBuf::from("/tmp/recipe-explorer-otlp.json"), resource);
/// ```
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
