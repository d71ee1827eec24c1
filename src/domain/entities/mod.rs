//! # Domain Entities
//!
//! - **Product**: a single catalog item (id, title, description, price)
//! - **Catalog**: the ordered, in-memory collection of all products
//!
//! The catalog lives for the duration of the process and is never persisted.

mod product;

pub use product::{Catalog, Product};
