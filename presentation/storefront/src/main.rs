use dotenvy::dotenv;

mod config;
mod setup;
mod views;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, shell::Shell};

/// Storefront terminal host
///
/// Loads the catalog from the remote store, wires one presenter per view and
/// drives the session from stdin.
/// - config/: remote store endpoints
/// - setup/: dependency injection and the command shell
/// - views/: text views rendering into display surfaces
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr to keep stdout for the UI
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::debug!(
        api_url = %config.store_api.api_url,
        cdn_url = %config.store_api.cdn_url,
        "Store API configured"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Load the catalog once for the session
    let catalog = container.load_catalog.execute().await?;

    // 6. Build presenters and run the shell
    let (session, screens) = container.assemble_session(catalog);
    Shell::new(
        session,
        screens,
        container.place_order.clone(),
        container.logger.clone(),
    )
    .run()
    .await
}
