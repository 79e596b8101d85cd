//! Ingestion - fetch from the lookup service, normalize, resolve
//!
//! Nothing is written until the fetch and decode have succeeded. Records of a
//! batch are resolved one after another; each one commits or fails on its own.

use serde::Serialize;

use crate::domain::{Catalog, DomainError};
use crate::gutendex::{BookSource, RawRecord, decode};
use crate::services::normalizer::{NormalizedCandidate, normalize};
use crate::services::query::SearchQuery;
use crate::services::resolver::{Resolution, resolve_book};

/// Per-record result of a batch import
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestOutcome {
    Resolved { resolution: Resolution },
    Failed { title: Option<String>, error: String },
}

/// A search hit, with whether an equivalent title is already catalogued
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveredBook {
    #[serde(flatten)]
    pub candidate: NormalizedCandidate,
    pub in_catalog: bool,
}

/// Run the search and decode every record of the first result page.
pub async fn fetch_records(
    source: &dyn BookSource,
    query: &SearchQuery,
) -> Result<Vec<RawRecord>, DomainError> {
    let payload = source.search(query).await?;
    let records = decode(&payload)?;
    tracing::info!("Search {:?} returned {} records", query, records.len());
    Ok(records)
}

/// Normalize and resolve a single raw record.
pub async fn ingest_record(catalog: &Catalog, raw: &RawRecord) -> Result<Resolution, DomainError> {
    let candidate = normalize(raw)?;
    resolve_book(catalog, &candidate).await
}

/// Search by title and ingest the first result.
pub async fn import_by_title(
    catalog: &Catalog,
    source: &dyn BookSource,
    title: &str,
) -> Result<Resolution, DomainError> {
    let query = SearchQuery::by_title(title)?;
    let records = fetch_records(source, &query).await?;

    let first = records.first().ok_or_else(|| {
        tracing::info!("No book found for '{}'", title.trim());
        DomainError::NotFound
    })?;

    ingest_record(catalog, first).await
}

/// Ingest records in order; a failure affects only its own record.
pub async fn ingest_batch(catalog: &Catalog, records: &[RawRecord]) -> Vec<IngestOutcome> {
    let mut outcomes = Vec::with_capacity(records.len());

    for raw in records {
        let outcome = match ingest_record(catalog, raw).await {
            Ok(resolution) => IngestOutcome::Resolved { resolution },
            Err(e) => {
                tracing::warn!("Skipping record {:?}: {}", raw.title, e);
                IngestOutcome::Failed {
                    title: raw.title.clone(),
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Search without importing: fetch everything, keep the first `limit` valid records.
pub async fn discover(
    catalog: &Catalog,
    source: &dyn BookSource,
    query: &SearchQuery,
    limit: usize,
) -> Result<Vec<DiscoveredBook>, DomainError> {
    let records = fetch_records(source, query).await?;

    let mut discovered = Vec::new();
    for raw in &records {
        if discovered.len() >= limit {
            break;
        }

        let candidate = match normalize(raw) {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::warn!("Ignoring search hit: {}", e);
                continue;
            }
        };

        let in_catalog = catalog
            .books
            .find_by_fuzzy_title(&candidate.title)
            .await?
            .is_some();
        discovered.push(DiscoveredBook {
            candidate,
            in_catalog,
        });
    }

    Ok(discovered)
}
