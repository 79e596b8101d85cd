//! Services Layer
//!
//! Catalog logic independent of the HTTP layer. Every operation takes the
//! `Catalog` storage handle explicitly.

pub mod author_service;
pub mod import_service;
pub mod normalizer;
pub mod query;
pub mod resolver;
pub mod stats_service;

// Re-export for convenience
pub use normalizer::{AuthorDescriptor, NormalizedCandidate, normalize};
pub use query::SearchQuery;
pub use resolver::{Resolution, resolve_author, resolve_book};
