use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::author_service;

#[derive(Debug, Deserialize)]
pub struct AuthorSearchQuery {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/authors",
    responses(
        (status = 200, description = "Every author with their catalogued books")
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let authors = author_service::list_authors(&state.catalog).await?;

    Ok(Json(json!({
        "total": authors.len(),
        "authors": authors
    })))
}

#[utoipa::path(
    get,
    path = "/api/authors/search",
    params(
        ("name" = String, Query, description = "Part of the author's name")
    ),
    responses(
        (status = 200, description = "Matching authors with their books"),
        (status = 400, description = "Empty name")
    )
)]
pub async fn search_authors(
    State(state): State<AppState>,
    Query(params): Query<AuthorSearchQuery>,
) -> Result<Json<Value>, DomainError> {
    let authors = author_service::search_authors(&state.catalog, &params.name).await?;

    Ok(Json(json!({
        "total": authors.len(),
        "authors": authors
    })))
}

#[utoipa::path(
    get,
    path = "/api/authors/alive/{year}",
    params(
        ("year" = i32, Path, description = "Year; negative for BCE")
    ),
    responses(
        (status = 200, description = "Authors alive in that year")
    )
)]
pub async fn alive_authors(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Value>, DomainError> {
    let authors = author_service::list_alive_in(&state.catalog, year).await?;

    Ok(Json(json!({
        "year": year,
        "total": authors.len(),
        "authors": authors
    })))
}
