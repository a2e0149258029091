//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: `EnvFilter` plus an OpenTelemetry layer
/// exporting to `~/.local/share/zellij/bookstore/bookstore-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created, or a
/// subscriber is already installed, this returns without doing anything.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "Bookstore"),
        KeyValue::new("bookstore.store_name", config.store_name.clone()),
    ]);

    let provider = tracer::create_tracer_provider(paths::trace_file(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("bookstore"));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(config)))
        .with(otel_layer)
        .try_init();
}

/// The `EnvFilter` directive for `config`; blank levels fall back to `info`.
fn filter_directive(config: &Config) -> String {
    config
        .trace_level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults_to_info() {
        assert_eq!(filter_directive(&Config::default()), "info");

        let blank = Config {
            trace_level: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(filter_directive(&blank), "info");

        let debug = Config {
            trace_level: Some("bookstore=debug".to_string()),
            ..Config::default()
        };
        assert_eq!(filter_directive(&debug), "bookstore=debug");
    }
}
