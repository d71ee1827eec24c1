//! Validation Utilities
//!
//! Field checks shared by the add-product form and the catalog service.

use validator::ValidationError;

/// Raw price text that is not a positive number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Product price must be positive number!")]
pub struct InvalidPrice;

/// Parse a submitted price.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number
/// strictly greater than zero is rejected.
pub fn parse_price(raw: &str) -> Result<f64, InvalidPrice> {
    let price: f64 = raw.trim().parse().map_err(|_| InvalidPrice)?;

    if !price.is_finite() || price <= 0.0 {
        return Err(InvalidPrice);
    }

    Ok(price)
}

/// Reject titles that are empty or whitespace only.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut error = ValidationError::new("empty_title");
        error.message = Some("Product title must not be empty!".into());
        return Err(error);
    }
    Ok(())
}
