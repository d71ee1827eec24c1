//! Common Test Utilities
//!
//! Shared helpers and test infrastructure.

use axum_test::{TestResponse, TestServer};

use product_catalog::config::Settings;
use product_catalog::startup::{build_router, AppState};

/// Test application wrapping the full router, middleware included
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Application with the two debug products
    pub fn seeded() -> Self {
        Self::with_seed(true)
    }

    /// Application with an empty catalog
    pub fn empty() -> Self {
        Self::with_seed(false)
    }

    fn with_seed(seed_debug_products: bool) -> Self {
        let mut settings = Settings::default();
        settings.catalog.seed_debug_products = seed_debug_products;

        let state = AppState::new(settings).expect("Failed to build app state");
        let server = TestServer::new(build_router(state)).expect("Failed to start test server");

        Self { server }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.server.get(uri).await
    }

    /// Submit the add-product form
    pub async fn add_product(&self, title: &str, description: &str, price: &str) -> TestResponse {
        self.server
            .post("/add_product/")
            .form(&[
                ("title", title),
                ("description", description),
                ("price", price),
            ])
            .await
    }

    /// Number of rows in the rendered catalog table
    pub async fn catalog_size(&self) -> usize {
        self.get("/catalog/").await.text().matches("/delete_product/").count()
    }
}
