use dotenvy::dotenv;
use std::sync::Arc;
use structura::{config, core::stores::Stores, data::MockData, errors::Result, web};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = Arc::new(config::load_app_configuration()?);
    info!("Successfully processed application configuration.");

    // 4. Populate the domain stores
    let stores = Arc::new(Stores::new(Arc::new(MockData)));
    info!("Domain stores populated from mock data.");

    // 5. Serve until Ctrl+C
    web::serve(app_config, stores)
        .await
        .inspect_err(|e| error!("Server error: {}", e))?;

    Ok(())
}
