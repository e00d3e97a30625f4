use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{contest_category, ganado::SexoGanado, ContestCategory};

/// Category name fragment expected for an animal of `sex` aged `age_months`.
pub fn expected_category_fragment(sex: SexoGanado, age_months: i64) -> &'static str {
    match sex {
        SexoGanado::Macho => match age_months {
            ..=12 => "Ternero Menor",
            13..=18 => "Ternero Mayor",
            19..=24 => "Torete",
            25..=36 => "Toro Joven",
            _ => "Toro Adulto",
        },
        SexoGanado::Hembra => match age_months {
            ..=12 => "Ternera Menor",
            13..=18 => "Ternera Mayor",
            19..=24 => "Vaquillona",
            25..=36 => "Vaca Joven",
            _ => "Vaca Adulta",
        },
    }
}

/// Resolves the category of a row inside `contest_id`.
///
/// An exact name match wins. Otherwise the contest's categories are scanned in
/// rank order for the first whose name contains the age/sex fragment.
/// `Ok(None)` means the row cannot be categorized.
pub async fn resolve_category(
    db: &DatabaseConnection,
    contest_id: Uuid,
    csv_name: &str,
    age_months: i64,
    sex: SexoGanado,
) -> Result<Option<Uuid>, DbErr> {
    if !csv_name.is_empty() {
        let direct = ContestCategory::find()
            .filter(contest_category::Column::ContestId.eq(contest_id))
            .filter(contest_category::Column::Nombre.eq(csv_name))
            .one(db)
            .await?;
        if let Some(category) = direct {
            return Ok(Some(category.id));
        }
    }

    let categories = ContestCategory::find()
        .filter(contest_category::Column::ContestId.eq(contest_id))
        .order_by_asc(contest_category::Column::Orden)
        .all(db)
        .await?;

    let fragment = expected_category_fragment(sex, age_months);
    let found = categories
        .into_iter()
        .find(|c| c.nombre.contains(fragment))
        .map(|c| c.id);

    if found.is_some() {
        tracing::debug!(category = csv_name, fragment, "Category inferred from age and sex");
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_thresholds() {
        assert_eq!(expected_category_fragment(SexoGanado::Macho, 0), "Ternero Menor");
        assert_eq!(expected_category_fragment(SexoGanado::Macho, 12), "Ternero Menor");
        assert_eq!(expected_category_fragment(SexoGanado::Macho, 13), "Ternero Mayor");
        assert_eq!(expected_category_fragment(SexoGanado::Macho, 24), "Torete");
        assert_eq!(expected_category_fragment(SexoGanado::Macho, 36), "Toro Joven");
        assert_eq!(expected_category_fragment(SexoGanado::Macho, 37), "Toro Adulto");
    }

    #[test]
    fn female_thresholds() {
        assert_eq!(expected_category_fragment(SexoGanado::Hembra, 6), "Ternera Menor");
        assert_eq!(expected_category_fragment(SexoGanado::Hembra, 18), "Ternera Mayor");
        assert_eq!(expected_category_fragment(SexoGanado::Hembra, 20), "Vaquillona");
        assert_eq!(expected_category_fragment(SexoGanado::Hembra, 30), "Vaca Joven");
        assert_eq!(expected_category_fragment(SexoGanado::Hembra, 120), "Vaca Adulta");
    }
}
