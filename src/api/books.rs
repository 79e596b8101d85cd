use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::stats_service;

const DEFAULT_TOP: usize = 10;

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub n: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "Every catalogued book in catalog order")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let books = state.catalog.books.find_all().await?;

    Ok(Json(json!({
        "total": books.len(),
        "books": books
    })))
}

#[utoipa::path(
    get,
    path = "/api/books/top",
    params(
        ("n" = Option<usize>, Query, description = "How many books to return (default 10)")
    ),
    responses(
        (status = 200, description = "Most downloaded books")
    )
)]
pub async fn top_books(
    State(state): State<AppState>,
    Query(params): Query<TopQuery>,
) -> Result<Json<Value>, DomainError> {
    let books =
        stats_service::top_by_downloads(&state.catalog, params.n.unwrap_or(DEFAULT_TOP)).await?;

    Ok(Json(json!({ "books": books })))
}

#[utoipa::path(
    get,
    path = "/api/books/language/{code}",
    params(
        ("code" = String, Path, description = "Language code, e.g. 'es'")
    ),
    responses(
        (status = 200, description = "Books stored with that language"),
        (status = 400, description = "Empty language code")
    )
)]
pub async fn books_by_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, DomainError> {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        return Err(DomainError::InvalidQuery(
            "language code cannot be empty".to_string(),
        ));
    }

    let books = stats_service::by_language(&state.catalog, &code).await?;

    Ok(Json(json!({
        "language": code,
        "display_name": stats_service::language_name(&code),
        "total": books.len(),
        "books": books
    })))
}
