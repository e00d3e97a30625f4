//! Log and trace setup shared by the binaries.
//!
//! `RUST_LOG` sets the filter, `RUST_LOG_FORMAT=json` switches to one JSON
//! object per line, and `OTEL_EXPORTER_OTLP_ENDPOINT` enables span export.

use opentelemetry::trace::TraceError;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace as sdktrace, Resource};
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,ganado_import=info,sqlx=warn,sea_orm=warn";

pub fn init_telemetry(service_name: &str) {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let tracer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .and_then(|endpoint| match otlp_tracer(service_name, endpoint) {
            Ok(tracer) => Some(tracer),
            Err(e) => {
                // no subscriber yet, so this cannot go through tracing
                eprintln!("OpenTelemetry exporter disabled: {e}");
                None
            }
        });
    let otel = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    let registry = tracing_subscriber::registry().with(filter).with(otel);
    let json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

fn otlp_tracer(service_name: &str, endpoint: String) -> Result<sdktrace::Tracer, TraceError> {
    let config = sdktrace::config()
        .with_resource(Resource::new([KeyValue::new(
            SERVICE_NAME,
            service_name.to_string(),
        )]))
        .with_sampler(sdktrace::Sampler::AlwaysOn);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(config)
        .install_batch(opentelemetry_sdk::runtime::Tokio)
}

/// Flushes pending spans. Call before `main` returns.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
