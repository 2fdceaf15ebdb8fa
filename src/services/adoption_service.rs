// src/services/adoption_service.rs
use std::sync::Arc;

use crate::domain::{DomainError, Pet};
use crate::error::{AppError, AppResult};
use crate::events::{AdoptionRequested, AdoptionStarted, EventBus};
use crate::repositories::PetRepository;

/// Adoption gallery. Adoptions are confirmation messages only; no pet's
/// availability ever changes.
pub struct AdoptionService {
    pet_repo: Arc<dyn PetRepository>,
    event_bus: Arc<EventBus>,
}

impl AdoptionService {
    pub fn new(pet_repo: Arc<dyn PetRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            pet_repo,
            event_bus,
        }
    }

    /// Every pet, adopted ones included (they render as "Adoptado")
    pub fn gallery(&self) -> AppResult<Vec<Pet>> {
        self.pet_repo.list_all()
    }

    pub fn get_pet(&self, pet_id: &str) -> AppResult<Pet> {
        self.pet_repo.get_by_id(pet_id)?.ok_or(AppError::NotFound)
    }

    /// The gallery's adopt button is disabled for unavailable pets
    pub fn start_adoption(&self, pet: &Pet) -> AppResult<String> {
        if !pet.is_available {
            return Err(AppError::Domain(DomainError::InvariantViolation(format!(
                "{} is not available for adoption",
                pet.name
            ))));
        }

        log::info!("Adoption started for {}", pet.id);
        self.event_bus.emit(AdoptionStarted::new(pet.id.clone()));
        Ok(format!("¡Has iniciado el proceso de adopción de {}!", pet.name))
    }

    pub fn finalize_adoption(&self, pet: &Pet) -> String {
        log::info!("Adoption request submitted for {}", pet.id);
        self.event_bus.emit(AdoptionRequested::new(pet.id.clone()));
        format!(
            "¡Felicidades! Has completado la solicitud de adopción de {}. Te contactaremos pronto.",
            pet.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryPetRepository;

    fn service() -> (AdoptionService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let repo = InMemoryPetRepository::with_sample_data().unwrap();
        (AdoptionService::new(Arc::new(repo), Arc::clone(&bus)), bus)
    }

    #[test]
    fn test_gallery_includes_adopted_pets() {
        let (service, _) = service();
        let pets = service.gallery().unwrap();
        assert_eq!(pets.len(), 6);
        assert!(pets.iter().any(|p| p.id == "dog2" && !p.is_available));
    }

    #[test]
    fn test_start_and_finalize_messages() {
        let (service, bus) = service();
        let max = service.get_pet("dog1").unwrap();

        assert_eq!(
            service.start_adoption(&max).unwrap(),
            "¡Has iniciado el proceso de adopción de Max!"
        );
        assert_eq!(
            service.finalize_adoption(&max),
            "¡Felicidades! Has completado la solicitud de adopción de Max. Te contactaremos pronto."
        );
        assert_eq!(
            bus.emitted_types(),
            vec!["AdoptionStarted".to_string(), "AdoptionRequested".to_string()]
        );
    }

    #[test]
    fn test_finalize_leaves_availability_untouched() {
        let (service, _) = service();
        let max = service.get_pet("dog1").unwrap();
        service.finalize_adoption(&max);
        assert!(service.get_pet("dog1").unwrap().is_available);
    }

    #[test]
    fn test_unavailable_pet_cannot_start_adoption() {
        let (service, bus) = service();
        let luna = service.get_pet("dog2").unwrap();
        assert!(matches!(
            service.start_adoption(&luna),
            Err(AppError::Domain(DomainError::InvariantViolation(_)))
        ));
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_unknown_pet() {
        let (service, _) = service();
        assert!(matches!(service.get_pet("unicorn"), Err(AppError::NotFound)));
    }
}
