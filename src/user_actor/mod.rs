//! User storage wiring: the `Entity` implementation and the seed accounts.

pub mod entity;
mod seed;

pub use seed::seed_users;
