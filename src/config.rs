use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::import::{ticket::DEFAULT_MAX_PROBES, ImportOptions};

/// Command-line arguments for the importer. Every flag can also come from the
/// environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(name = "ganado-import")]
#[command(about = "Import a livestock roster CSV into a contest")]
#[command(version)]
pub struct ImportArgs {
    /// URL of the CSV document
    #[arg(long, env = "GANADO_CSV_URL")]
    pub csv_url: String,

    /// Contest id, slug, or part of its name
    #[arg(long, env = "GANADO_CONTEST")]
    pub contest: String,

    /// Delete the contest's existing animals before importing
    #[arg(short, long)]
    pub clean: bool,

    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum ticket-number probes per row before the row fails
    #[arg(long, default_value_t = DEFAULT_MAX_PROBES, env = "GANADO_MAX_TICKET_PROBES")]
    pub max_ticket_probes: u32,

    /// Timeout for the CSV download; none by default
    #[arg(long, env = "GANADO_FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: Option<u64>,

    /// Write a Prometheus text snapshot here when the run ends
    #[arg(long, env = "GANADO_METRICS_FILE")]
    pub metrics_file: Option<PathBuf>,
}

impl ImportArgs {
    pub fn options(&self) -> ImportOptions {
        ImportOptions {
            clean: self.clean,
            max_ticket_probes: self.max_ticket_probes,
            ..Default::default()
        }
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.fetch_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

/// Command-line arguments for the schema migrator.
#[derive(Parser, Debug, Clone)]
#[command(name = "migrate")]
#[command(about = "Apply pending database migrations")]
#[command(version)]
pub struct MigrateArgs {
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

/// Process exit code for an argument error: 0 for `--help`/`--version`,
/// 1 for anything else so config failures match other setup failures.
pub fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Parses arguments from the environment, printing clap's message and exiting
/// with [`exit_code`] on failure.
pub fn parse_or_exit<P: Parser>() -> P {
    P::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(exit_code(&err));
    })
}
