use sea_orm::DbErr;
use thiserror::Error;

/// Errors that abort an import run.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The CSV source answered with a non-2xx status.
    #[error("Error downloading CSV: {status} {text}")]
    Fetch { status: u16, text: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The document had no header line.
    #[error("CSV document is empty")]
    EmptyCsv,

    #[error("Contest not found: {0}")]
    ContestNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Errors confined to a single CSV row. The run records them and moves on.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("no category could be resolved for '{category}'")]
    NoCategory { category: String },

    #[error("no free ticket number after {attempts} attempts")]
    TicketExhausted { attempts: u32 },

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl RowError {
    /// Metric label for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RowError::NoCategory { .. } => "no_category",
            RowError::TicketExhausted { .. } => "ticket_exhausted",
            RowError::Database(_) => "database",
        }
    }
}
