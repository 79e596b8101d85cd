use axum::{Json, extract::State};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::stats_service::{self, CatalogStatistics};

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Totals, download statistics, language histogram and most prolific author")
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<CatalogStatistics>, DomainError> {
    let stats = stats_service::catalog_statistics(&state.catalog).await?;
    Ok(Json(stats))
}
