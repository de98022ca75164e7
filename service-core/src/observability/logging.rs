use anyhow::Context;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn otlp_tracer(service_name: &str, otlp_endpoint: &str) -> anyhow::Result<sdktrace::Tracer> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
        .with_context(|| {
            format!(
                "Failed to initialize OTLP tracer for service '{}' at endpoint '{}'",
                service_name, otlp_endpoint
            )
        })
}

/// Install the global subscriber: JSON logs, plus OTLP export when an endpoint is given.
///
/// `RUST_LOG` overrides `log_level`. Must run inside a Tokio runtime when exporting.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    otlp_endpoint: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let telemetry = match otlp_endpoint {
        Some(endpoint) => Some(
            tracing_opentelemetry::layer().with_tracer(otlp_tracer(service_name, endpoint)?),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
        .context("Global tracing subscriber already installed")?;

    Ok(())
}
