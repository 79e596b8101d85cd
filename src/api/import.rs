use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::DomainError;
use crate::gutendex::RawRecord;
use crate::infrastructure::AppState;
use crate::services::import_service;

#[derive(Debug, Deserialize)]
pub struct ImportTitleRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ImportRecordsRequest {
    pub records: Vec<RawRecord>,
}

#[utoipa::path(
    post,
    path = "/api/import/title",
    responses(
        (status = 201, description = "Book created"),
        (status = 200, description = "Book already in the catalog"),
        (status = 400, description = "Empty title"),
        (status = 404, description = "No book found"),
        (status = 502, description = "Lookup service failure")
    )
)]
pub async fn import_by_title(
    State(state): State<AppState>,
    Json(payload): Json<ImportTitleRequest>,
) -> Result<Response, DomainError> {
    let resolution =
        import_service::import_by_title(&state.catalog, state.source.as_ref(), &payload.title)
            .await?;

    let status = if resolution.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(resolution)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/import/records",
    responses(
        (status = 200, description = "Per-record outcomes, in request order")
    )
)]
pub async fn import_records(
    State(state): State<AppState>,
    Json(payload): Json<ImportRecordsRequest>,
) -> impl IntoResponse {
    let outcomes = import_service::ingest_batch(&state.catalog, &payload.records).await;

    (
        StatusCode::OK,
        Json(json!({
            "total": outcomes.len(),
            "outcomes": outcomes
        })),
    )
}
