//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{Author, AuthorRepository, DomainError, NewAuthor, substring_equivalent};
use crate::models::author::{ActiveModel, Column, Entity as AuthorEntity};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    async fn find_by_fuzzy_name(&self, name: &str) -> Result<Option<Author>, DomainError> {
        // Containment in both directions; scanned in memory
        let authors = self.find_all().await?;
        let found = authors
            .into_iter()
            .find(|a| substring_equivalent(name, &a.name));

        tracing::debug!("Fuzzy author lookup '{}' -> {:?}", name, found.as_ref().map(|a| a.id));
        Ok(found)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Author>, DomainError> {
        let needle = fragment.to_lowercase();
        let authors = self.find_all().await?;

        Ok(authors
            .into_iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect())
    }

    async fn create(&self, author: NewAuthor) -> Result<Author, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let model = ActiveModel {
            name: Set(author.name),
            birth_year: Set(author.lifespan.birth_year),
            death_year: Set(author.lifespan.death_year),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(Author::from(result))
    }
}
