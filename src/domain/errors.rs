//! Domain error types
//!
//! These errors are framework-agnostic and represent catalog-level failures.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Empty or malformed user-supplied search input
    InvalidQuery(String),
    /// Source record is missing a mandatory field
    InvalidRecord(String),
    /// Network failure or non-success response from the lookup service
    ExternalService(String),
    /// Storage-layer create/read failure
    Persistence(String),
    /// The lookup service returned no result
    NotFound,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidQuery(msg) => write!(f, "Invalid query: {}", msg),
            DomainError::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
            DomainError::ExternalService(msg) => write!(f, "External service error: {}", msg),
            DomainError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            DomainError::NotFound => write!(f, "No matching book found"),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::ExternalService(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::ExternalService(format!("Failed to parse JSON: {}", e))
    }
}
