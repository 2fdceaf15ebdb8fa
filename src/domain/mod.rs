// src/domain/mod.rs
//
// Domain Root - value types and invariants
//
// All other modules import from `crate::domain::*`.
// Domain records are immutable sample data; the only mutable domain value
// is the session cart.

pub mod audio_episode;
pub mod cart;
pub mod pet;
pub mod pet_type;
pub mod product;

pub use audio_episode::{validate_audio_episode, AudioEpisode, AudioResource};
pub use cart::Cart;
pub use pet::{validate_pet, Pet};
pub use pet_type::PetType;
pub use product::{validate_product, Product, ProductCategory};

use std::collections::HashSet;
use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Episode {0} must have a duration greater than zero")]
    InvalidDuration(String),

    #[error("Invalid screen transition: {0}")]
    InvalidTransition(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Ids must be unique within each static list
pub fn ensure_unique_ids<'a, I>(ids: I) -> DomainResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_pass() {
        assert!(ensure_unique_ids(["a", "b", "c"]).is_ok());
    }

    #[test]
    fn test_duplicate_id_reported() {
        match ensure_unique_ids(["a", "b", "a"]) {
            Err(DomainError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id, got {:?}", other),
        }
    }
}
