// src/repositories/pet_repository.rs

use std::sync::Arc;

use crate::data::sample_pets;
use crate::domain::{ensure_unique_ids, validate_pet, Pet, PetType};
use crate::error::AppResult;

pub trait PetRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Pet>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Pet>>;
    fn pets_by_type(&self, pet_type: PetType) -> AppResult<Vec<Pet>>;
}

pub struct InMemoryPetRepository {
    pets: Arc<Vec<Pet>>,
}

impl InMemoryPetRepository {
    pub fn new(pets: Vec<Pet>) -> AppResult<Self> {
        for pet in &pets {
            validate_pet(pet)?;
        }
        ensure_unique_ids(pets.iter().map(|p| p.id.as_str()))?;

        Ok(Self {
            pets: Arc::new(pets),
        })
    }

    pub fn with_sample_data() -> AppResult<Self> {
        Self::new(sample_pets())
    }
}

impl PetRepository for InMemoryPetRepository {
    fn list_all(&self) -> AppResult<Vec<Pet>> {
        Ok(self.pets.as_ref().clone())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Pet>> {
        Ok(self.pets.iter().find(|p| p.id == id).cloned())
    }

    fn pets_by_type(&self, pet_type: PetType) -> AppResult<Vec<Pet>> {
        Ok(self
            .pets
            .iter()
            .filter(|p| p.pet_type == pet_type)
            .cloned()
            .collect())
    }
}
