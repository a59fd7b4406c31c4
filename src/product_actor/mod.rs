//! Product storage wiring: the `Entity` implementation and the seed catalog.

pub mod entity;
mod seed;

pub use seed::seed_products;
