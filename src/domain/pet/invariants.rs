use super::entity::Pet;
use crate::domain::{DomainError, DomainResult};

/// Validates all Pet invariants
pub fn validate_pet(pet: &Pet) -> DomainResult<()> {
    if pet.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Pet id cannot be empty".to_string(),
        ));
    }
    if pet.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Pet {} has no name",
            pet.id
        )));
    }
    validate_video_url(pet)?;
    Ok(())
}

/// The video player only understands remote http(s) URIs
fn validate_video_url(pet: &Pet) -> DomainResult<()> {
    if !(pet.video_url.starts_with("https://") || pet.video_url.starts_with("http://")) {
        return Err(DomainError::InvariantViolation(format!(
            "Pet {} has a non-http video URL: {}",
            pet.id, pet.video_url
        )));
    }
    Ok(())
}
