use anyhow::Context;
use ganado_import::config::{self, ImportArgs};
use ganado_import::import::{self, ImportReport};
use ganado_import::{database, metrics, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    let args: ImportArgs = config::parse_or_exit();

    telemetry::init_telemetry("ganado-import");
    let metric_handle = metrics::install_recorder().context("Failed to install metrics recorder")?;

    tracing::info!(contest = %args.contest, clean = args.clean, "Starting livestock import");
    let result = run(&args).await;

    if let Some(path) = &args.metrics_file {
        if let Err(e) = metrics::write_snapshot(&metric_handle, path).await {
            tracing::warn!("Failed to write metrics to {}: {}", path.display(), e);
        }
    }

    match result {
        Ok(report) => {
            print!("{report}");
            tracing::info!("Import completed");
            telemetry::shutdown_telemetry();
            Ok(())
        }
        Err(e) => {
            tracing::error!("Import failed: {:#}", e);
            telemetry::shutdown_telemetry();
            Err(e)
        }
    }
}

async fn run(args: &ImportArgs) -> anyhow::Result<ImportReport> {
    let db = database::connect(&args.database_url)
        .await
        .context("Failed to connect to database")?;
    let http = args.http_client().context("Failed to build HTTP client")?;

    let result = import::run_import(&db, &http, &args.csv_url, &args.contest, args.options()).await;

    // The connection is released whatever the outcome
    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    Ok(result?)
}
