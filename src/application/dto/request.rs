//! Request DTOs
//!
//! Data structures for submitted form bodies.

use serde::Deserialize;
use validator::Validate;

/// Add-product form body (`application/x-www-form-urlencoded`).
///
/// `price` stays as raw text so it can be echoed back unchanged when it
/// fails to parse.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddProductRequest {
    #[validate(custom(function = "crate::shared::validation::validate_title"))]
    pub title: String,

    pub description: String,

    pub price: String,
}

impl AddProductRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}
