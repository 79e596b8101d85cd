//! Search the lookup service without writing to the catalog.
//!
//! Results are truncated client-side; the service is never asked for a limit.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::SearchQuery;
use crate::services::import_service;

const DEFAULT_TOPIC_LIMIT: usize = 10;
const DEFAULT_POPULAR_LIMIT: usize = 15;

#[derive(Debug, Deserialize)]
pub struct TopicQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct YearRangeQuery {
    pub start: i32,
    pub end: i32,
    pub limit: Option<usize>,
}

async fn run(state: &AppState, query: SearchQuery, limit: usize) -> Result<Json<Value>, DomainError> {
    let books =
        import_service::discover(&state.catalog, state.source.as_ref(), &query, limit).await?;

    Ok(Json(json!({
        "total": books.len(),
        "books": books
    })))
}

#[utoipa::path(
    get,
    path = "/api/discover/topic",
    params(
        ("q" = String, Query, description = "Topic, e.g. 'children'"),
        ("limit" = Option<usize>, Query, description = "Maximum results (default 10)")
    ),
    responses(
        (status = 200, description = "Search hits flagged with in_catalog"),
        (status = 400, description = "Empty topic")
    )
)]
pub async fn by_topic(
    State(state): State<AppState>,
    Query(params): Query<TopicQuery>,
) -> Result<Json<Value>, DomainError> {
    let query = SearchQuery::by_topic(&params.q)?;
    run(&state, query, params.limit.unwrap_or(DEFAULT_TOPIC_LIMIT)).await
}

#[utoipa::path(
    get,
    path = "/api/discover/popular",
    params(
        ("limit" = Option<usize>, Query, description = "Maximum results (default 15)")
    ),
    responses(
        (status = 200, description = "Most popular books flagged with in_catalog")
    )
)]
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Value>, DomainError> {
    run(
        &state,
        SearchQuery::most_popular(),
        params.limit.unwrap_or(DEFAULT_POPULAR_LIMIT),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/discover/language/{code}",
    params(
        ("code" = String, Path, description = "Two-letter language code"),
        ("limit" = Option<usize>, Query, description = "Maximum results (default 10)")
    ),
    responses(
        (status = 200, description = "Books in that language flagged with in_catalog"),
        (status = 400, description = "Invalid language code")
    )
)]
pub async fn by_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Value>, DomainError> {
    let query = SearchQuery::by_language(&code)?;
    run(&state, query, params.limit.unwrap_or(DEFAULT_TOPIC_LIMIT)).await
}

#[utoipa::path(
    get,
    path = "/api/discover/author-years",
    params(
        ("start" = i32, Query, description = "First year of the range"),
        ("end" = i32, Query, description = "Last year of the range"),
        ("limit" = Option<usize>, Query, description = "Maximum results (default 10)")
    ),
    responses(
        (status = 200, description = "Books by authors alive within the range"),
        (status = 400, description = "Start after end")
    )
)]
pub async fn by_author_years(
    State(state): State<AppState>,
    Query(params): Query<YearRangeQuery>,
) -> Result<Json<Value>, DomainError> {
    let query = SearchQuery::by_author_years(params.start, params.end)?;
    run(&state, query, params.limit.unwrap_or(DEFAULT_TOPIC_LIMIT)).await
}
