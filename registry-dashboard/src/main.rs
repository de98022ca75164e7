use dotenvy::dotenv;
use registry_dashboard::config::{crate_directory, get_configuration};
use registry_dashboard::i18n::CatalogTranslator;
use registry_dashboard::services::directory::InMemoryDirectory;
use registry_dashboard::startup::build_router;
use registry_dashboard::AppState;
use service_core::observability::logging::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &configuration.telemetry.service_name,
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    )?;

    registry_dashboard::services::metrics::init_metrics()
        .map_err(|e| anyhow::anyhow!("Failed to register metrics: {}", e))?;

    if configuration.dashboard.locale != "en-CA" {
        tracing::warn!(
            locale = %configuration.dashboard.locale,
            "Only the en-CA catalog is bundled; falling back to it"
        );
    }
    let translator = Arc::new(CatalogTranslator::en_ca()?);

    let directory = match configuration
        .directory
        .resolve_fixtures(&crate_directory()?)
    {
        Some(path) => InMemoryDirectory::from_json_file(&path)?,
        None => {
            tracing::warn!("No business fixtures configured; directory is empty");
            InMemoryDirectory::default()
        }
    };

    let app = build_router(AppState::new(Arc::new(directory), translator));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting registry-dashboard on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
