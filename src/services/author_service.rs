//! Author queries: temporal existence and listings with derived books

use serde::Serialize;

use crate::domain::{Author, Book, Catalog, DomainError};

/// An author with the books currently linked to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorWithBooks {
    #[serde(flatten)]
    pub author: Author,
    pub books: Vec<Book>,
}

/// Unknown bounds place no constraint, so an author with no known years is alive in every year.
pub fn alive_in(author: &Author, year: i32) -> bool {
    author.lifespan.includes(year)
}

/// Authors alive in `year`, in catalog order
pub async fn list_alive_in(catalog: &Catalog, year: i32) -> Result<Vec<Author>, DomainError> {
    let authors = catalog.authors.find_all().await?;
    let alive: Vec<Author> = authors.into_iter().filter(|a| alive_in(a, year)).collect();

    tracing::debug!("{} authors alive in {}", alive.len(), year);
    Ok(alive)
}

/// Every author with its books
pub async fn list_authors(catalog: &Catalog) -> Result<Vec<AuthorWithBooks>, DomainError> {
    let authors = catalog.authors.find_all().await?;
    with_books(catalog, authors).await
}

/// Authors whose name contains `fragment` (case-insensitive), with their books
pub async fn search_authors(
    catalog: &Catalog,
    fragment: &str,
) -> Result<Vec<AuthorWithBooks>, DomainError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(DomainError::InvalidQuery(
            "author name cannot be empty".to_string(),
        ));
    }

    let authors = catalog.authors.search_by_name(fragment).await?;
    with_books(catalog, authors).await
}

async fn with_books(
    catalog: &Catalog,
    authors: Vec<Author>,
) -> Result<Vec<AuthorWithBooks>, DomainError> {
    let mut result = Vec::with_capacity(authors.len());
    for author in authors {
        let books = catalog.books.find_by_author(author.id).await?;
        result.push(AuthorWithBooks { author, books });
    }
    Ok(result)
}
