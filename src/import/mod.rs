//! Livestock CSV import.
//!
//! A run resolves the target contest, optionally clears its animals, downloads
//! and parses the CSV, then processes rows one at a time: normalize fields,
//! resolve the category, find or create owner and stable, allocate a ticket
//! number and insert the animal. Row failures are counted and skipped. When
//! the loop ends the contest's participant count is set to the number of
//! animals created.

pub mod category;
pub mod csv_reader;
pub mod fetch;
pub mod normalize;
pub mod owners;
pub mod report;
pub mod ticket;

use chrono::NaiveDate;
use reqwest::Client;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{contest, ganado, Contest, Ganado};
use crate::error::{ImportError, RowError};
use crate::metrics;

pub use csv_reader::{parse_csv, CsvRecord};
pub use fetch::fetch_csv;
pub use report::ImportReport;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Delete the contest's animals before importing.
    pub clean: bool,
    pub max_ticket_probes: u32,
    /// Reference date for age calculation.
    pub today: NaiveDate,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            clean: false,
            max_ticket_probes: ticket::DEFAULT_MAX_PROBES,
            today: chrono::Utc::now().date_naive(),
        }
    }
}

/// Looks a contest up by id, exact slug, or case-insensitive name fragment,
/// in that order. Among name matches the oldest contest wins.
pub async fn find_contest(
    db: &DatabaseConnection,
    reference: &str,
) -> Result<contest::Model, ImportError> {
    let reference = reference.trim();

    let found = if let Ok(id) = Uuid::parse_str(reference) {
        Contest::find_by_id(id).one(db).await?
    } else {
        match Contest::find()
            .filter(contest::Column::Slug.eq(reference))
            .one(db)
            .await?
        {
            Some(contest) => Some(contest),
            None => {
                let pattern = format!("%{}%", escape_like(&reference.to_lowercase()));
                Contest::find()
                    .filter(
                        Expr::expr(Func::lower(Expr::col(contest::Column::Nombre)))
                            .like(LikeExpr::new(pattern).escape('\\')),
                    )
                    .order_by_asc(contest::Column::CreatedAt)
                    .one(db)
                    .await?
            }
        }
    };

    found.ok_or_else(|| ImportError::ContestNotFound(reference.to_string()))
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Deletes every animal registered in `contest_id`.
pub async fn clean_contest(db: &DatabaseConnection, contest_id: Uuid) -> Result<u64, DbErr> {
    let res = Ganado::delete_many()
        .filter(ganado::Column::ContestId.eq(contest_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Imports parsed rows into a single contest.
pub struct Importer<'a> {
    db: &'a DatabaseConnection,
    contest: contest::Model,
    options: ImportOptions,
}

impl<'a> Importer<'a> {
    pub fn new(db: &'a DatabaseConnection, contest: contest::Model, options: ImportOptions) -> Self {
        Self { db, contest, options }
    }

    /// Processes every record and sets the contest's participant count.
    pub async fn import_records(&self, records: &[CsvRecord]) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::new(self.contest.nombre.clone());
        report.processed = records.len();
        tracing::info!(rows = records.len(), "Records found in CSV");

        for (index, record) in records.iter().enumerate() {
            tracing::info!(
                "Processing record {}/{}: {}",
                index + 1,
                records.len(),
                record.name()
            );

            match self.import_row(index, record, &mut report).await {
                Ok(animal) => {
                    tracing::info!(
                        name = %animal.nombre,
                        ticket = %animal.numero_ficha,
                        "Animal created"
                    );
                    metrics::increment_rows_created();
                    report.record_created(&animal);
                }
                Err(e @ RowError::NoCategory { .. }) => {
                    tracing::warn!(
                        row = index + 1,
                        line = record.line,
                        name = record.name(),
                        "Skipping row: {}",
                        e
                    );
                    metrics::increment_rows_failed(e.kind());
                    report.record_error();
                }
                Err(e) => {
                    tracing::error!(
                        row = index + 1,
                        line = record.line,
                        name = record.name(),
                        "Failed to import row: {}",
                        e
                    );
                    metrics::increment_rows_failed(e.kind());
                    report.record_error();
                }
            }
        }

        self.set_participant_count(report.created).await?;
        metrics::set_participants(&self.contest.nombre, report.created);

        Ok(report)
    }

    async fn import_row(
        &self,
        index: usize,
        record: &CsvRecord,
        report: &mut ImportReport,
    ) -> Result<ganado::Model, RowError> {
        let contest = &self.contest;

        let nombre = record.name().trim().to_string();
        let raza = normalize::normalize_breed(record.raza());
        let sexo = normalize::classify_sex(record.sexo());
        let fecha_nacimiento = normalize::parse_birth_date(record.nacimiento());
        let puntaje = normalize::parse_score(record.puntaje());
        let age_months =
            normalize::age_in_months(fecha_nacimiento, record.dias_nacida(), self.options.today);

        let category_id =
            category::resolve_category(self.db, contest.id, record.categoria(), age_months, sexo)
                .await?
                .ok_or_else(|| RowError::NoCategory {
                    category: record.categoria().to_string(),
                })?;

        let mut propietario_id = None;
        if !record.propietario().is_empty() {
            let owner =
                owners::find_or_create_owner(self.db, contest.company_id, record.propietario())
                    .await?;
            if owner.created {
                report.owners_created += 1;
                metrics::increment_owners_created();
            }
            propietario_id = Some(owner.model.id);
        }

        let mut establo_id = None;
        if !record.establo().is_empty() {
            let stable =
                owners::find_or_create_stable(self.db, contest.company_id, record.establo())
                    .await?;
            if stable.created {
                report.stables_created += 1;
                metrics::increment_stables_created();
            }
            establo_id = Some(stable.model.id);
        }

        let numero_ficha = ticket::allocate_ticket(
            self.db,
            contest.id,
            record.id(),
            index,
            self.options.max_ticket_probes,
        )
        .await?;

        let now = chrono::Utc::now().naive_utc();
        let animal = ganado::ActiveModel {
            id: Set(Uuid::new_v4()),
            nombre: Set(nombre),
            numero_ficha: Set(numero_ficha),
            raza: Set(raza),
            sexo: Set(sexo),
            fecha_nacimiento: Set(fecha_nacimiento),
            descripcion: Set(record.descripcion().to_string()),
            imagen_url: Set(normalize::optional_text(record.image_src())),
            en_remate: Set(normalize::parse_auction_flag(record.remate())),
            is_destacado: Set(normalize::is_featured(puntaje)),
            puntaje: Set(puntaje),
            company_id: Set(contest.company_id),
            propietario_id: Set(propietario_id),
            establo_id: Set(establo_id),
            contest_id: Set(contest.id),
            contest_category_id: Set(category_id),
            created_by_id: Set(contest.created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(animal.insert(self.db).await?)
    }

    async fn set_participant_count(&self, created: usize) -> Result<(), ImportError> {
        let mut active = self.contest.clone().into_active_model();
        active.participant_count = Set(created as i32);
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        active.update(self.db).await?;
        Ok(())
    }
}

/// Runs a complete import of the CSV at `csv_url` into the contest matching
/// `contest_ref`.
pub async fn run_import(
    db: &DatabaseConnection,
    http: &Client,
    csv_url: &str,
    contest_ref: &str,
    options: ImportOptions,
) -> Result<ImportReport, ImportError> {
    let contest = find_contest(db, contest_ref).await?;
    tracing::info!(contest = %contest.nombre, id = %contest.id, "Contest found");

    let mut deleted = 0;
    if options.clean {
        tracing::info!("Removing existing animals");
        deleted = clean_contest(db, contest.id).await?;
        tracing::info!(deleted, "Existing animals removed");
    }

    let text = fetch_csv(http, csv_url).await?;
    let records = parse_csv(&text)?;

    let importer = Importer::new(db, contest, options);
    let mut report = importer.import_records(&records).await?;
    report.deleted_before_import = deleted;
    report.log();

    Ok(report)
}
