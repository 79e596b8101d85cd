//! Entity resolution - existing vs. new, for authors and books
//!
//! Both lookups use case-insensitive substring containment in either
//! direction. The first match in catalog order wins; stored records are never
//! updated from a candidate.

use serde::Serialize;

use crate::domain::{
    Author, Book, Catalog, DomainError, NewAuthor, NewBook, UNKNOWN_LANGUAGE,
};
use crate::services::normalizer::{AuthorDescriptor, NormalizedCandidate};

/// Outcome of resolving one candidate book
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "book", rename_all = "snake_case")]
pub enum Resolution {
    Existing(Book),
    Created(Book),
}

impl Resolution {
    pub fn book(&self) -> &Book {
        match self {
            Resolution::Existing(book) | Resolution::Created(book) => book,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Resolution::Created(_))
    }
}

/// Return the stored author equivalent to `descriptor`, creating it if none exists.
pub async fn resolve_author(
    catalog: &Catalog,
    descriptor: &AuthorDescriptor,
) -> Result<Author, DomainError> {
    if let Some(existing) = catalog.authors.find_by_fuzzy_name(&descriptor.name).await? {
        tracing::debug!(
            "Author '{}' resolved to existing '{}' (id={})",
            descriptor.name,
            existing.name,
            existing.id
        );
        return Ok(existing);
    }

    let created = catalog
        .authors
        .create(NewAuthor {
            name: descriptor.name.clone(),
            lifespan: descriptor.lifespan,
        })
        .await
        .inspect_err(|e| tracing::error!("Failed to create author '{}': {}", descriptor.name, e))?;

    tracing::info!("New author added: {} (id={})", created.name, created.id);
    Ok(created)
}

/// Return the stored book equivalent to the candidate, or create it with defaults applied.
pub async fn resolve_book(
    catalog: &Catalog,
    candidate: &NormalizedCandidate,
) -> Result<Resolution, DomainError> {
    if let Some(existing) = catalog.books.find_by_fuzzy_title(&candidate.title).await? {
        tracing::info!(
            "Book '{}' already in catalog as '{}' (id={})",
            candidate.title,
            existing.title,
            existing.id
        );
        return Ok(Resolution::Existing(existing));
    }

    let language = candidate
        .primary_language()
        .filter(|code| !code.is_empty())
        .unwrap_or(UNKNOWN_LANGUAGE)
        .to_string();
    let download_count = candidate.download_count.filter(|n| *n >= 0).unwrap_or(0);

    let author = match candidate.primary_author() {
        Some(descriptor) => Some(resolve_author(catalog, descriptor).await?),
        None => None,
    };

    let created = catalog
        .books
        .create(NewBook {
            title: candidate.title.clone(),
            author,
            language,
            download_count,
        })
        .await
        .inspect_err(|e| tracing::error!("Failed to create book '{}': {}", candidate.title, e))?;

    tracing::info!("Book added to catalog: {} (id={})", created.title, created.id);
    Ok(Resolution::Created(created))
}
