use super::entity::Product;
use crate::domain::{DomainError, DomainResult};

/// Validates all Product invariants
pub fn validate_product(product: &Product) -> DomainResult<()> {
    if product.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Product id cannot be empty".to_string(),
        ));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Product {} has an invalid price {}",
            product.id, product.price
        )));
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(DomainError::InvariantViolation(format!(
            "Product {} rating {} is outside 0-5",
            product.id, product.rating
        )));
    }
    Ok(())
}
