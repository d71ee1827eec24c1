//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CatalogService**: list, add and delete products in the in-memory catalog

pub mod catalog_service;

// Re-export catalog service types
pub use catalog_service::{
    AddProductRejection, CatalogError, CatalogService, CatalogServiceImpl, DeleteOutcome,
    EchoedInput,
};
