use anyhow::Context;
use ganado_import::config::{self, MigrateArgs};
use ganado_import::{database, migrator, telemetry};
use sea_orm_migration::MigratorTrait;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args: MigrateArgs = config::parse_or_exit();
    telemetry::init_telemetry("ganado-migrate");

    let db = database::connect(&args.database_url)
        .await
        .context("Failed to connect to database")?;

    let result = migrator::Migrator::up(&db, None).await;
    db.close().await.ok();

    if result.is_ok() {
        tracing::info!("Migrations applied");
    }
    telemetry::shutdown_telemetry();

    result.context("Failed to run migrations")
}
