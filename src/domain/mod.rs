//! # Domain Layer
//!
//! The domain layer contains the core business rules of the catalog.
//! It is independent of any web framework or rendering concerns.
//!
//! ## Structure
//!
//! - **entities**: `Product` and the `Catalog` aggregate that owns them
//!
//! ## Design Principles
//!
//! - No dependencies on application, infrastructure or presentation layers
//! - The catalog enforces its own id and title invariants
//! - Entities are plain data that serialize directly into view-models

pub mod entities;

// Re-export commonly used types
pub use entities::*;
