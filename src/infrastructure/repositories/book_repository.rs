//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::domain::{Book, BookRepository, DomainError, NewBook, substring_equivalent};
use crate::models::author::Entity as AuthorEntity;
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run a book query in catalog order, joining each row with its author.
    async fn fetch_with_authors(&self, query: Select<BookEntity>) -> Result<Vec<Book>, DomainError> {
        let rows = query
            .order_by_asc(Column::Id)
            .find_also_related(AuthorEntity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(book, author)| Book::from_models(book, author))
            .collect())
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        self.fetch_with_authors(BookEntity::find()).await
    }

    async fn find_by_fuzzy_title(&self, title: &str) -> Result<Option<Book>, DomainError> {
        let books = self.find_all().await?;
        let found = books
            .into_iter()
            .find(|b| substring_equivalent(title, &b.title));

        tracing::debug!("Fuzzy title lookup '{}' -> {:?}", title, found.as_ref().map(|b| b.id));
        Ok(found)
    }

    async fn find_by_language(&self, code: &str) -> Result<Vec<Book>, DomainError> {
        // BINARY collation: exact, case-sensitive
        self.fetch_with_authors(BookEntity::find().filter(Column::Language.eq(code)))
            .await
    }

    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DomainError> {
        self.fetch_with_authors(BookEntity::find().filter(Column::AuthorId.eq(author_id)))
            .await
    }

    async fn create(&self, book: NewBook) -> Result<Book, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let model = ActiveModel {
            title: Set(book.title),
            author_id: Set(book.author.as_ref().map(|a| a.id)),
            language: Set(book.language),
            download_count: Set(book.download_count),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        Ok(Book {
            id: result.id,
            title: result.title,
            author: book.author,
            language: result.language,
            download_count: result.download_count,
        })
    }
}
