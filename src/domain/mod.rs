//! Domain layer - Pure catalog abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only catalog records, trait definitions and domain error types.

pub mod catalog;
pub mod errors;
pub mod repositories;

pub use catalog::*;
pub use errors::DomainError;
pub use repositories::*;
