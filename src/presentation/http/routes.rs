//! Route Configuration
//!
//! Configures all HTTP routes. The catalog paths, including their trailing
//! slashes, are part of the public interface.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(catalog_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(handlers::catalog::not_found)
        .with_state(state)
}

/// Catalog pages
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::catalog::homepage))
        .route("/catalog/", get(handlers::catalog::get_all_products))
        .route(
            "/show_form_add_product/",
            get(handlers::catalog::show_form_add_product),
        )
        .route("/add_product/", post(handlers::catalog::add_product))
        .route(
            "/delete_product/{product_id}",
            get(handlers::catalog::delete_product),
        )
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    ))
}
