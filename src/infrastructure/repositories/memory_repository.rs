//! In-memory implementation of both catalog repositories
//!
//! Same lookup semantics as the SeaORM repositories, including exact-key
//! uniqueness on author names and book titles. Used by tests and for
//! throwaway sessions that need no database file.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::{
    Author, AuthorRepository, Book, BookRepository, DomainError, NewAuthor, NewBook,
    substring_equivalent,
};

#[derive(Default)]
struct Tables {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Catalog held in two vectors, in insertion order.
#[derive(Default)]
pub struct InMemoryCatalog {
    tables: Mutex<Tables>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, DomainError> {
        self.tables
            .lock()
            .map_err(|_| DomainError::Persistence("catalog lock poisoned".to_string()))
    }
}

#[async_trait]
impl AuthorRepository for InMemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.lock()?.authors.clone())
    }

    async fn find_by_fuzzy_name(&self, name: &str) -> Result<Option<Author>, DomainError> {
        Ok(self
            .lock()?
            .authors
            .iter()
            .find(|a| substring_equivalent(name, &a.name))
            .cloned())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Author>, DomainError> {
        let needle = fragment.to_lowercase();
        Ok(self
            .lock()?
            .authors
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, author: NewAuthor) -> Result<Author, DomainError> {
        let mut tables = self.lock()?;
        if tables.authors.iter().any(|a| a.name == author.name) {
            return Err(DomainError::Persistence(format!(
                "UNIQUE constraint failed: authors.name ({})",
                author.name
            )));
        }

        let created = Author {
            id: tables.authors.len() as i32 + 1,
            name: author.name,
            lifespan: author.lifespan,
        };
        tables.authors.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl BookRepository for InMemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        Ok(self.lock()?.books.clone())
    }

    async fn find_by_fuzzy_title(&self, title: &str) -> Result<Option<Book>, DomainError> {
        Ok(self
            .lock()?
            .books
            .iter()
            .find(|b| substring_equivalent(title, &b.title))
            .cloned())
    }

    async fn find_by_language(&self, code: &str) -> Result<Vec<Book>, DomainError> {
        Ok(self
            .lock()?
            .books
            .iter()
            .filter(|b| b.language == code)
            .cloned()
            .collect())
    }

    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DomainError> {
        Ok(self
            .lock()?
            .books
            .iter()
            .filter(|b| b.author.as_ref().is_some_and(|a| a.id == author_id))
            .cloned()
            .collect())
    }

    async fn create(&self, book: NewBook) -> Result<Book, DomainError> {
        let mut tables = self.lock()?;
        if tables.books.iter().any(|b| b.title == book.title) {
            return Err(DomainError::Persistence(format!(
                "UNIQUE constraint failed: books.title ({})",
                book.title
            )));
        }

        let created = Book {
            id: tables.books.len() as i32 + 1,
            title: book.title,
            author: book.author,
            language: book.language,
            download_count: book.download_count,
        };
        tables.books.push(created.clone());
        Ok(created)
    }
}
