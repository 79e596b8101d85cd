use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Book;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub author_id: Option<i32>,
    #[sea_orm(default_value = "unknown")]
    pub language: String,
    pub download_count: i64,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Book {
    /// Build the catalog record from a row and its (optional) author row.
    pub fn from_models(model: Model, author: Option<super::author::Model>) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: author.map(Into::into),
            language: model.language,
            download_count: model.download_count,
        }
    }
}
