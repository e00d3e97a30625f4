use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::{establo, propietario, Establo, Propietario};

/// Outcome of a find-or-create lookup.
#[derive(Debug, Clone)]
pub struct Resolved<M> {
    pub model: M,
    pub created: bool,
}

/// Returns the owner named `name` in `company_id`, creating it on first use.
pub async fn find_or_create_owner(
    db: &DatabaseConnection,
    company_id: Uuid,
    name: &str,
) -> Result<Resolved<propietario::Model>, DbErr> {
    let existing = Propietario::find()
        .filter(propietario::Column::CompanyId.eq(company_id))
        .filter(propietario::Column::NombreCompleto.eq(name))
        .one(db)
        .await?;

    if let Some(model) = existing {
        return Ok(Resolved { model, created: false });
    }

    let model = propietario::ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre_completo: Set(name.to_string()),
        company_id: Set(company_id),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(db)
    .await?;

    tracing::info!(owner = %model.nombre_completo, "Owner created");
    Ok(Resolved { model, created: true })
}

/// Returns the stable named `name` in `company_id`, creating it on first use.
pub async fn find_or_create_stable(
    db: &DatabaseConnection,
    company_id: Uuid,
    name: &str,
) -> Result<Resolved<establo::Model>, DbErr> {
    let existing = Establo::find()
        .filter(establo::Column::CompanyId.eq(company_id))
        .filter(establo::Column::Nombre.eq(name))
        .one(db)
        .await?;

    if let Some(model) = existing {
        return Ok(Resolved { model, created: false });
    }

    let model = establo::ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre: Set(name.to_string()),
        company_id: Set(company_id),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(db)
    .await?;

    tracing::info!(stable = %model.nombre, "Stable created");
    Ok(Resolved { model, created: true })
}
