//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::Catalog;
use crate::gutendex::BookSource;
use crate::infrastructure::{SeaOrmAuthorRepository, SeaOrmBookRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Author and book repositories
    pub catalog: Catalog,
    /// External lookup service
    pub source: Arc<dyn BookSource>,
}

impl AppState {
    /// Create a new AppState backed by the SeaORM repositories
    pub fn new(db: DatabaseConnection, source: Arc<dyn BookSource>) -> Self {
        let author_repo = Arc::new(SeaOrmAuthorRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db));

        Self {
            catalog: Catalog::new(author_repo, book_repo),
            source,
        }
    }

    /// Create an AppState over any catalog (e.g. the in-memory one)
    pub fn with_catalog(catalog: Catalog, source: Arc<dyn BookSource>) -> Self {
        Self { catalog, source }
    }
}
