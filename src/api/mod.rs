pub mod author;
pub mod books;
pub mod discover;
pub mod health;
pub mod import;
pub mod stats;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Ingestion
        .route("/import/title", post(import::import_by_title))
        .route("/import/records", post(import::import_records))
        // Discovery (no writes)
        .route("/discover/topic", get(discover::by_topic))
        .route("/discover/popular", get(discover::popular))
        .route("/discover/language/:code", get(discover::by_language))
        .route("/discover/author-years", get(discover::by_author_years))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/top", get(books::top_books))
        .route("/books/language/:code", get(books::books_by_language))
        // Authors
        .route("/authors", get(author::list_authors))
        .route("/authors/search", get(author::search_authors))
        .route("/authors/alive/:year", get(author::alive_authors))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state)
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::InvalidQuery(_) | DomainError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound => StatusCode::NOT_FOUND,
            DomainError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
