use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "contest")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub company_id: Uuid,
    pub created_by_id: Uuid,
    pub participant_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contest_category::Entity")]
    ContestCategory,
    #[sea_orm(has_many = "super::ganado::Entity")]
    Ganado,
}

impl Related<super::contest_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContestCategory.def()
    }
}

impl Related<super::ganado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ganado.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
