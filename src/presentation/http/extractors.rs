//! Custom Extractors
//!
//! Axum extractors for path parameters.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::shared::error::AppError;

/// `{product_id}` path segment parsed as an integer.
///
/// A non-integer id is answered with a 400 page instead of axum's plain
/// text rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Rejected malformed product id");
                AppError::BadRequest("Product id must be an integer".into())
            })?;

        Ok(ProductId(id))
    }
}
