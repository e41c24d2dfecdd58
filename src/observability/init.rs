//! Subscriber setup.
//!
//! Builds the `tracing-subscriber` registry: an `EnvFilter` from the
//! configured level and an OpenTelemetry layer exporting to the trace file.

use super::{tracer, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `trace_level` is unset or invalid.
const DEFAULT_LEVEL: &str = "info";

/// Trace file name inside the plugin data directory.
const TRACE_FILE: &str = "recipe-explorer-otlp.json";

/// Installs the global subscriber for the calling thread's runtime.
///
/// Does nothing if the data directory cannot be created; tracing is optional
/// and never blocks startup. Only the first call takes effect.
///
/// # Parameters
///
/// * `config` - Plugin configuration; only `trace_level` is read. An invalid
///   directive falls back to `info`.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::Config;
///
/// let config = Config {
///     trace_level: Some("recipe_explorer=debug".to_string()),
///     ..Config::default()
/// };
/// recipe_explorer::observability::init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();
}
