//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name recorded on every span.
pub const SERVICE_NAME: &str = "glocate";

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "glocate-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber writing OTLP JSON to the data
/// directory.
///
/// The filter comes from `RUST_LOG` if set, then `config.trace_level`, then
/// `info`. A filter of `off` skips installation entirely. Failure to create
/// the data directory disables tracing silently: the terminal is about to be
/// taken over, so there is nowhere useful to report it. Later calls are no-ops.
///
/// # Example
///
/// ```rust
/// use glocate::observability::init_tracing;
/// use glocate::Config;
///
/// let config = Config {
///     trace_level: Some("off".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let directives = resolve_directives(std::env::var("RUST_LOG").ok(), config.trace_level.as_deref());
    if directives.eq_ignore_ascii_case("off") {
        return;
    }

    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

/// Picks the filter directives: a non-blank `RUST_LOG` wins over the
/// configured level, which wins over [`DEFAULT_LEVEL`].
fn resolve_directives(env: Option<String>, configured: Option<&str>) -> String {
    env.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| configured.map(str::trim).filter(|l| !l.is_empty()).map(String::from))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}
