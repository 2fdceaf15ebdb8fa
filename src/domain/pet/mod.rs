pub mod entity;
pub mod invariants;

pub use entity::Pet;
pub use invariants::validate_pet;
