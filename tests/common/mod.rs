#![allow(dead_code)]

use axum::{http::StatusCode, routing::get, Router};
use chrono::NaiveDate;
use ganado_import::entities::{contest, contest_category, ganado};
use ganado_import::import::ImportOptions;
use ganado_import::migrator::Migrator;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

pub const HEADER: &str = "id,name,createdAt,nacimiento,diasNacida,categoria,establo,remate,propietario,descripcion,raza,sexo,imageSrc,puntaje";

/// Fresh in-memory SQLite database with the schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn options() -> ImportOptions {
    ImportOptions {
        clean: false,
        max_ticket_probes: 50,
        today: today(),
    }
}

pub async fn create_contest(db: &DatabaseConnection, nombre: &str, slug: &str) -> contest::Model {
    create_contest_for_company(db, nombre, slug, Uuid::new_v4()).await
}

pub async fn create_contest_for_company(
    db: &DatabaseConnection,
    nombre: &str,
    slug: &str,
    company_id: Uuid,
) -> contest::Model {
    let now = chrono::Utc::now().naive_utc();
    contest::ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre: Set(nombre.to_string()),
        slug: Set(slug.to_string()),
        company_id: Set(company_id),
        created_by_id: Set(Uuid::new_v4()),
        participant_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to create contest")
}

pub async fn create_category(
    db: &DatabaseConnection,
    contest_id: Uuid,
    nombre: &str,
    orden: i32,
) -> Uuid {
    contest_category::ActiveModel {
        id: Set(Uuid::new_v4()),
        contest_id: Set(contest_id),
        nombre: Set(nombre.to_string()),
        orden: Set(orden),
        created_at: Set(chrono::Utc::now().naive_utc()),
    }
    .insert(db)
    .await
    .expect("Failed to create category")
    .id
}

/// Inserts an animal directly, bypassing the importer.
pub async fn insert_animal(
    db: &DatabaseConnection,
    contest: &contest::Model,
    category_id: Uuid,
    numero_ficha: &str,
) -> ganado::Model {
    let now = chrono::Utc::now().naive_utc();
    ganado::ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre: Set(format!("Existente {numero_ficha}")),
        numero_ficha: Set(numero_ficha.to_string()),
        raza: Set("Holstein".to_string()),
        sexo: Set(ganado::SexoGanado::Hembra),
        fecha_nacimiento: Set(None),
        descripcion: Set(String::new()),
        imagen_url: Set(None),
        en_remate: Set(false),
        is_destacado: Set(false),
        puntaje: Set(None),
        company_id: Set(contest.company_id),
        propietario_id: Set(None),
        establo_id: Set(None),
        contest_id: Set(contest.id),
        contest_category_id: Set(category_id),
        created_by_id: Set(contest.created_by_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert animal")
}

/// One CSV data row. Unset columns are left empty.
#[derive(Default, Clone)]
pub struct Row {
    pub id: &'static str,
    pub name: &'static str,
    pub nacimiento: &'static str,
    pub dias_nacida: &'static str,
    pub categoria: &'static str,
    pub establo: &'static str,
    pub remate: &'static str,
    pub propietario: &'static str,
    pub descripcion: &'static str,
    pub raza: &'static str,
    pub sexo: &'static str,
    pub image_src: &'static str,
    pub puntaje: &'static str,
}

impl Row {
    pub fn named(name: &'static str, categoria: &'static str) -> Self {
        Self {
            name,
            categoria,
            ..Default::default()
        }
    }

    fn line(&self) -> String {
        [
            self.id,
            self.name,
            "2024-01-01T00:00:00Z",
            self.nacimiento,
            self.dias_nacida,
            self.categoria,
            self.establo,
            self.remate,
            self.propietario,
            self.descripcion,
            self.raza,
            self.sexo,
            self.image_src,
            self.puntaje,
        ]
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(",")
    }
}

pub fn csv(rows: &[Row]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(&row.line());
    }
    text
}

/// Serves `body` at `/ganado.csv` and a 404 at `/missing.csv` on an
/// ephemeral port. Returns the base URL.
pub async fn spawn_csv_server(body: String) -> String {
    let app = Router::new()
        .route(
            "/ganado.csv",
            get(move || {
                let body = body.clone();
                async move { body }
            }),
        )
        .route(
            "/missing.csv",
            get(|| async { (StatusCode::NOT_FOUND, "not here") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{addr}")
}
