// src/data/mod.rs
//
// Static sample data loaded once at startup.
// Lists are returned in source order; lookups rely on that order.

mod episodes;
mod pets;
mod products;

pub use episodes::sample_episodes;
pub use pets::sample_pets;
pub use products::sample_products;
