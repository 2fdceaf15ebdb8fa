// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are read-only lookups over static sample data
// - NO business logic
// - NO event emission
// - Filters preserve source order and return empty vectors on no match

pub mod episode_repository;
pub mod pet_repository;
pub mod product_repository;

pub use episode_repository::{EpisodeRepository, InMemoryEpisodeRepository};
pub use pet_repository::{InMemoryPetRepository, PetRepository};
pub use product_repository::{InMemoryProductRepository, ProductRepository};
