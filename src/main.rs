//! # Product Catalog
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - In-memory catalog
//! - HTTP server

use anyhow::Result;
use tracing::info;

use product_catalog::config::Settings;
use product_catalog::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    product_catalog::telemetry::init_tracing();

    info!("Starting Product Catalog...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        seed_debug_products = settings.catalog.seed_debug_products,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Server stopped");
    Ok(())
}
