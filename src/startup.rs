//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::application::services::{CatalogService, CatalogServiceImpl};
use crate::config::Settings;
use crate::domain::Catalog;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::logging;
use crate::presentation::views::Views;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub views: Views,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build state with a fresh catalog as configured by `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        let catalog = if settings.catalog.seed_debug_products {
            Catalog::with_debug_products()
        } else {
            Catalog::new()
        };
        tracing::info!(products = catalog.len(), "Catalog initialized");

        Ok(Self {
            catalog: Arc::new(CatalogServiceImpl::new(catalog)),
            views: Views::new()?,
            settings: Arc::new(settings),
        })
    }
}

/// Build the full router with middleware
pub fn build_router(state: AppState) -> Router {
    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(logging::create_trace_layer())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let addr = settings.server.socket_addr()?;
        let state = AppState::new(settings)?;
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
