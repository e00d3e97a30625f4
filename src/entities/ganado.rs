use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SexoGanado {
    #[sea_orm(string_value = "MACHO")]
    Macho,
    #[sea_orm(string_value = "HEMBRA")]
    Hembra,
}

impl SexoGanado {
    pub fn as_str(&self) -> &'static str {
        match self {
            SexoGanado::Macho => "MACHO",
            SexoGanado::Hembra => "HEMBRA",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "ganado")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    /// Ticket number, unique inside a contest.
    pub numero_ficha: String,
    pub raza: String,
    pub sexo: SexoGanado,
    pub fecha_nacimiento: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub descripcion: String,
    pub imagen_url: Option<String>,
    pub en_remate: bool,
    pub is_destacado: bool,
    pub puntaje: Option<f64>,
    pub company_id: Uuid,
    pub propietario_id: Option<Uuid>,
    pub establo_id: Option<Uuid>,
    pub contest_id: Uuid,
    pub contest_category_id: Uuid,
    pub created_by_id: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contest::Entity",
        from = "Column::ContestId",
        to = "super::contest::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Contest,
    #[sea_orm(
        belongs_to = "super::contest_category::Entity",
        from = "Column::ContestCategoryId",
        to = "super::contest_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ContestCategory,
    #[sea_orm(
        belongs_to = "super::propietario::Entity",
        from = "Column::PropietarioId",
        to = "super::propietario::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Propietario,
    #[sea_orm(
        belongs_to = "super::establo::Entity",
        from = "Column::EstabloId",
        to = "super::establo::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Establo,
}

impl Related<super::contest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contest.def()
    }
}

impl Related<super::contest_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContestCategory.def()
    }
}

impl Related<super::propietario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Propietario.def()
    }
}

impl Related<super::establo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Establo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
