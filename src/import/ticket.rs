use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{ganado, Ganado};
use crate::error::RowError;

/// Default cap on collision probes per row.
pub const DEFAULT_MAX_PROBES: u32 = 10_000;

/// Prefix used when the row has no id of its own.
const GENERATED_PREFIX: &str = "F";

/// Ticket a row asks for: its own id, or `F` plus its 1-based position
/// zero-padded to four digits.
pub fn preferred_ticket(row_id: &str, index: usize) -> String {
    if row_id.is_empty() {
        format!("{GENERATED_PREFIX}{:04}", index + 1)
    } else {
        row_id.to_string()
    }
}

/// Candidate tried after `attempt` collisions (`attempt` starts at 1).
pub fn probe_ticket(row_id: &str, index: usize, attempt: u32) -> String {
    let prefix = if row_id.is_empty() { GENERATED_PREFIX } else { row_id };
    format!("{prefix}{:04}", index + 1 + attempt as usize)
}

async fn ticket_taken(
    db: &DatabaseConnection,
    contest_id: Uuid,
    ticket: &str,
) -> Result<bool, RowError> {
    let count = Ganado::find()
        .filter(ganado::Column::ContestId.eq(contest_id))
        .filter(ganado::Column::NumeroFicha.eq(ticket))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Probes for a ticket number not yet used inside `contest_id`.
pub async fn allocate_ticket(
    db: &DatabaseConnection,
    contest_id: Uuid,
    row_id: &str,
    index: usize,
    max_probes: u32,
) -> Result<String, RowError> {
    let mut ticket = preferred_ticket(row_id, index);
    let mut attempt = 0;

    while ticket_taken(db, contest_id, &ticket).await? {
        attempt += 1;
        if attempt > max_probes {
            return Err(RowError::TicketExhausted { attempts: max_probes });
        }
        tracing::debug!(ticket = %ticket, attempt, "Ticket taken, probing next");
        ticket = probe_ticket(row_id, index, attempt);
    }

    Ok(ticket)
}
