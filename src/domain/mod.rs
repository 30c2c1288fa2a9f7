//! Domain entities and value objects shared by the persistence and service
//! layers.

pub mod expiration;
pub mod product;
pub mod types;
