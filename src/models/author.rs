use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Author, Lifespan};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            lifespan: Lifespan::new(model.birth_year, model.death_year),
        }
    }
}
