use chromia_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    chromia_infra::init_telemetry(config.is_production())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Initialize the application (storage, scheduler, routes)
    let (state, router) = chromia_api::setup::initialize_app(config.clone()).await?;

    chromia_api::setup::server::start_server(&config, router).await?;

    // Temporary uploads must not outlive the process
    state.deletions.shutdown().await;

    Ok(())
}
