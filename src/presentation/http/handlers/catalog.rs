//! Catalog Handlers
//!
//! Every catalog outcome, including rejected input, is rendered as a
//! normal page with a message.

use axum::{extract::State, response::Html, Form};

use crate::application::dto::{AddProductRequest, AddProductView, CatalogView, HomeView, View};
use crate::presentation::http::extractors::ProductId;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Home page
pub async fn homepage(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.render(View::Home, &HomeView::default())
}

/// Catalog listing
pub async fn get_all_products(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = state.catalog.list().await;
    state.views.render(View::Catalog, &CatalogView::new(products))
}

/// Blank add-product form
pub async fn show_form_add_product(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let view = state.catalog.show_add_form().await;
    state.views.render(View::AddProduct, &view)
}

/// Add-product form submission
pub async fn add_product(
    State(state): State<AppState>,
    Form(body): Form<AddProductRequest>,
) -> Result<Html<String>, AppError> {
    let view = AddProductView::from(state.catalog.add_product(body).await);
    state.views.render(View::AddProduct, &view)
}

/// Delete a product and show the remaining catalog
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(product_id): ProductId,
) -> Result<Html<String>, AppError> {
    let outcome = state.catalog.delete_product(product_id).await;
    state.views.render(View::Catalog, &CatalogView::from(outcome))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
