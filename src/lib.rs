//! # Product Catalog Library
//!
//! A small catalog web application: list products, add a product through a
//! validated HTML form, and delete a product by id. The catalog is held in
//! process memory and lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer**: `Product` and the `Catalog` aggregate
//! - **Application Layer**: the catalog service, form input and view-models
//! - **Infrastructure Layer**: Prometheus metrics
//! - **Presentation Layer**: HTTP routes, middleware and Tera views
//!
//! ## Module Structure
//!
//! ```text
//! product_catalog/
//! +-- config/         Configuration management
//! +-- domain/         Product entity and catalog aggregate
//! +-- application/    Catalog service and DTOs
//! +-- infrastructure/ Metrics
//! +-- presentation/   HTTP routes, middleware and views
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and views
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
