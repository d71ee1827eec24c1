//! Data Transfer Objects
//!
//! Form bodies coming in and view-models going out to the templates.

pub mod request;
pub mod view;

pub use request::AddProductRequest;
pub use view::{AddProductView, CatalogView, HomeView, View};
