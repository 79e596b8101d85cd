//! Raw lookup records to normalized candidates
//!
//! The candidate is a faithful copy of the source: lists keep every entry and
//! missing values stay missing. Defaults are applied at resolution time.

use serde::Serialize;

use crate::domain::{DomainError, Lifespan};
use crate::gutendex::RawRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub lifespan: Lifespan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedCandidate {
    pub title: String,
    pub authors: Vec<AuthorDescriptor>,
    pub languages: Vec<String>,
    pub download_count: Option<i64>,
}

impl NormalizedCandidate {
    /// Narrowing step: only the first listed author is ever linked.
    pub fn primary_author(&self) -> Option<&AuthorDescriptor> {
        self.authors.first()
    }

    /// Narrowing step: only the first listed language is ever stored.
    pub fn primary_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }
}

pub fn normalize(raw: &RawRecord) -> Result<NormalizedCandidate, DomainError> {
    let title = match raw.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => {
            return Err(DomainError::InvalidRecord(
                "record has no title".to_string(),
            ));
        }
    };

    let authors = raw
        .authors
        .iter()
        .map(|a| AuthorDescriptor {
            name: a.name.clone(),
            lifespan: Lifespan::new(a.birth_year, a.death_year),
        })
        .collect();

    let download_count = match raw.download_count {
        Some(count) if count < 0 => {
            tracing::debug!("Dropping negative download count {} for '{}'", count, title);
            None
        }
        other => other,
    };

    Ok(NormalizedCandidate {
        title,
        authors,
        languages: raw.languages.clone(),
        download_count,
    })
}
