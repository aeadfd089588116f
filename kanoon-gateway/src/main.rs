use kanoon_gateway::config::GatewayConfig;
use kanoon_gateway::services::{FileStore, IkApiClient, SearchBackend};
use kanoon_gateway::startup::Application;
use service_core::observability::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("kanoon-gateway", "info", otlp_endpoint.as_deref());

    let config = GatewayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let store = FileStore::new(&config.storage.dir).await.map_err(|e| {
        tracing::error!(
            "Failed to initialize result storage at {}: {}",
            config.storage.dir.display(),
            e
        );
        e
    })?;

    let backend: Arc<dyn SearchBackend> = Arc::new(IkApiClient::new(
        Arc::new(config.ikapi.clone()),
        Arc::new(store),
    )?);

    let app = Application::build(&config, backend).await?;
    app.run_until_stopped().await?;

    Ok(())
}
