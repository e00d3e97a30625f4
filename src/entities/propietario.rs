use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Livestock owner, unique per organization by full name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "propietario")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre_completo: String,
    pub company_id: Uuid,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ganado::Entity")]
    Ganado,
}

impl Related<super::ganado::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ganado.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
