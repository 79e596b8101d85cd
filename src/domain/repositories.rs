//! Repository trait definitions
//!
//! These traits define the contract for catalog data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use std::sync::Arc;

use super::DomainError;
use super::catalog::{Author, Book, NewAuthor, NewBook};

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors in catalog order
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// First author (catalog order) whose name is substring-equivalent to `name`
    async fn find_by_fuzzy_name(&self, name: &str) -> Result<Option<Author>, DomainError>;

    /// Authors whose name contains `fragment`, ignoring case
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, author: NewAuthor) -> Result<Author, DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books in catalog order
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// First book (catalog order) whose title is substring-equivalent to `title`
    async fn find_by_fuzzy_title(&self, title: &str) -> Result<Option<Book>, DomainError>;

    /// Books whose stored language equals `code` exactly
    async fn find_by_language(&self, code: &str) -> Result<Vec<Book>, DomainError>;

    /// Books linked to the given author
    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, book: NewBook) -> Result<Book, DomainError>;
}

/// Storage handle passed explicitly to every catalog operation.
#[derive(Clone)]
pub struct Catalog {
    pub authors: Arc<dyn AuthorRepository>,
    pub books: Arc<dyn BookRepository>,
}

impl Catalog {
    pub fn new(authors: Arc<dyn AuthorRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { authors, books }
    }
}
