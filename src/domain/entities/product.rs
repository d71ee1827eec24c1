//! Product entity and the catalog aggregate.
//!
//! The catalog is the sole store of products. It keeps insertion order and
//! guarantees that ids are unique and positive and that titles are unique.

use serde::{Deserialize, Serialize};

/// A single catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier, unique and positive
    pub id: i64,

    /// Product title, unique across the catalog (exact match)
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Price, always greater than zero for stored products
    pub price: f64,
}

/// Ordered in-memory collection of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-seeded with the two debug products.
    pub fn with_debug_products() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    title: "Product 1".to_string(),
                    description: "Descr First".to_string(),
                    price: 100.0,
                },
                Product {
                    id: 2,
                    title: "Product 2".to_string(),
                    description: "Descr Second".to_string(),
                    price: 200.0,
                },
            ],
        }
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Position of the first product with the given id.
    pub fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }

    /// Check whether a product with exactly this title exists (case-sensitive).
    pub fn contains_title(&self, title: &str) -> bool {
        self.products.iter().any(|product| product.title == title)
    }

    /// Id for the next product: highest existing id plus one, or 1 when empty.
    ///
    /// Ids are not reserved, so removing the highest id allows it to be handed
    /// out again.
    pub fn next_id(&self) -> i64 {
        self.products
            .iter()
            .map(|product| product.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Append a new product with a freshly generated id.
    ///
    /// Callers are responsible for validating the title and price first.
    pub fn insert(&mut self, title: String, description: String, price: f64) -> Product {
        let product = Product {
            id: self.next_id(),
            title,
            description,
            price,
        };
        self.products.push(product.clone());
        product
    }

    /// Remove the product at `index`, keeping the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; use [`Catalog::find_index_by_id`]
    /// to obtain a valid index.
    pub fn remove_at(&mut self, index: usize) -> Product {
        self.products.remove(index)
    }
}
