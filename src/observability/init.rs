//! Tracing initialization and subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;

const SERVICE_NAME: &str = "Folio";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `/data/folio-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created, or a
/// subscriber is already installed, this does nothing.
///
/// # Example
///
/// ```rust,no_run
/// use folio::observability::init_tracing;
/// use folio::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(paths::trace_file(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
