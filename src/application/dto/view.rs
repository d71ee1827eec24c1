//! View-models
//!
//! Data handed to the template renderer, one struct per view. Field names
//! are the names the templates use.

use serde::Serialize;

use crate::application::services::{AddProductRejection, DeleteOutcome};
use crate::domain::Product;

/// The views the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Catalog,
    AddProduct,
}

impl View {
    /// Template file backing this view.
    pub fn template_name(&self) -> &'static str {
        match self {
            View::Home => "home.html",
            View::Catalog => "catalog.html",
            View::AddProduct => "add_product.html",
        }
    }
}

/// Home page, no data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HomeView {}

/// Catalog listing with an optional status message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogView {
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CatalogView {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            message: None,
        }
    }
}

impl From<DeleteOutcome> for CatalogView {
    fn from(outcome: DeleteOutcome) -> Self {
        let message = outcome.message();
        Self {
            products: outcome.products,
            message: Some(message),
        }
    }
}

/// Add-product form.
///
/// On a rejected submission `product` carries the entered title and
/// description (id and price zeroed) and `product_price` the raw price
/// text, so the form is redisplayed with the user's input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddProductView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price: Option<String>,
}

impl AddProductView {
    /// Blank form with no message.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form after a successful add; nothing is echoed.
    pub fn added(product: &Product) -> Self {
        Self {
            message: Some(format!("Product {} added.", product.title)),
            product: None,
            product_price: None,
        }
    }

    /// Form after a rejected add, with the submitted input echoed back.
    pub fn rejected(rejection: AddProductRejection) -> Self {
        let message = rejection.error.to_string();
        let echo = rejection.echo;
        Self {
            message: Some(message),
            product: Some(Product {
                id: 0,
                title: echo.title,
                description: echo.description,
                price: 0.0,
            }),
            product_price: Some(echo.raw_price),
        }
    }
}

impl From<Result<Product, AddProductRejection>> for AddProductView {
    fn from(result: Result<Product, AddProductRejection>) -> Self {
        match result {
            Ok(product) => Self::added(&product),
            Err(rejection) => Self::rejected(rejection),
        }
    }
}
