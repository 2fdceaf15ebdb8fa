pub mod entity;
pub mod invariants;

pub use entity::{Product, ProductCategory};
pub use invariants::validate_product;
