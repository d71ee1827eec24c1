//! Catalog Service
//!
//! Owns the in-memory catalog and implements listing, adding and deleting
//! products. All access goes through a single mutex so that the duplicate
//! check, id generation and append of an add happen as one step.

use async_trait::async_trait;
use parking_lot::Mutex;
use validator::Validate;

use crate::application::dto::{AddProductRequest, AddProductView};
use crate::domain::{Catalog, Product};
use crate::infrastructure::metrics;
use crate::shared::validation::{parse_price, InvalidPrice};

/// Catalog service trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> Vec<Product>;

    /// Blank add-product form
    async fn show_add_form(&self) -> AddProductView;

    /// Validate and append a new product
    async fn add_product(&self, request: AddProductRequest) -> Result<Product, AddProductRejection>;

    /// Position of the product with this id, if any
    async fn find_index_by_id(&self, id: i64) -> Option<usize>;

    /// Remove a product by id
    async fn delete_product(&self, id: i64) -> DeleteOutcome;

    /// Number of products currently stored
    async fn len(&self) -> usize;
}

/// Catalog validation outcomes.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidPrice(#[from] InvalidPrice),

    #[error("Product title must not be empty!")]
    EmptyTitle,

    #[error("Product {title} already in catalog!")]
    DuplicateTitle { title: String },

    #[error("Product id={id} not found!")]
    ProductNotFound { id: i64 },
}

/// The form input as the user submitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoedInput {
    pub title: String,
    pub description: String,
    pub raw_price: String,
}

impl From<AddProductRequest> for EchoedInput {
    fn from(request: AddProductRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            raw_price: request.price,
        }
    }
}

/// A rejected add, with the input to redisplay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct AddProductRejection {
    pub error: CatalogError,
    pub echo: EchoedInput,
}

impl AddProductRejection {
    fn new(error: CatalogError, request: AddProductRequest) -> Self {
        Self {
            error,
            echo: request.into(),
        }
    }
}

/// Result of a delete together with the catalog as it stands afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub products: Vec<Product>,
    pub result: Result<Product, CatalogError>,
}

impl DeleteOutcome {
    /// User-facing message describing the outcome.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(product) => format!("Product {} (id={}) deleted.", product.title, product.id),
            Err(e) => e.to_string(),
        }
    }
}

/// CatalogService implementation backed by a mutex-guarded [`Catalog`].
pub struct CatalogServiceImpl {
    catalog: Mutex<Catalog>,
}

impl CatalogServiceImpl {
    pub fn new(catalog: Catalog) -> Self {
        metrics::set_catalog_size(catalog.len());
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

impl Default for CatalogServiceImpl {
    fn default() -> Self {
        Self::new(Catalog::new())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list(&self) -> Vec<Product> {
        self.catalog.lock().products().to_vec()
    }

    async fn show_add_form(&self) -> AddProductView {
        AddProductView::empty()
    }

    async fn add_product(&self, request: AddProductRequest) -> Result<Product, AddProductRejection> {
        let price = match parse_price(&request.price) {
            Ok(price) => price,
            Err(e) => {
                tracing::debug!(raw_price = %request.price, "Rejected product with invalid price");
                metrics::record_catalog_operation("add", "invalid_price");
                return Err(AddProductRejection::new(e.into(), request));
            }
        };

        if request.validate().is_err() {
            tracing::debug!("Rejected product with empty title");
            metrics::record_catalog_operation("add", "empty_title");
            return Err(AddProductRejection::new(CatalogError::EmptyTitle, request));
        }

        let mut catalog = self.catalog.lock();

        if catalog.contains_title(&request.title) {
            drop(catalog);
            tracing::debug!(title = %request.title, "Rejected duplicate product title");
            metrics::record_catalog_operation("add", "duplicate_title");
            let error = CatalogError::DuplicateTitle {
                title: request.title.clone(),
            };
            return Err(AddProductRejection::new(error, request));
        }

        let product = catalog.insert(request.title, request.description, price);
        let size = catalog.len();
        drop(catalog);

        metrics::set_catalog_size(size);
        metrics::record_catalog_operation("add", "added");
        tracing::info!(
            product_id = product.id,
            title = %product.title,
            price = product.price,
            "Product added"
        );

        Ok(product)
    }

    async fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.catalog.lock().find_index_by_id(id)
    }

    async fn delete_product(&self, id: i64) -> DeleteOutcome {
        let mut catalog = self.catalog.lock();

        let result = match catalog.find_index_by_id(id) {
            Some(index) => Ok(catalog.remove_at(index)),
            None => Err(CatalogError::ProductNotFound { id }),
        };
        let products = catalog.products().to_vec();
        drop(catalog);

        match &result {
            Ok(product) => {
                metrics::set_catalog_size(products.len());
                metrics::record_catalog_operation("delete", "deleted");
                tracing::info!(product_id = id, title = %product.title, "Product deleted");
            }
            Err(_) => {
                metrics::record_catalog_operation("delete", "not_found");
                tracing::debug!(product_id = id, "Delete requested for unknown product");
            }
        }

        DeleteOutcome { products, result }
    }

    async fn len(&self) -> usize {
        self.catalog.lock().len()
    }
}
