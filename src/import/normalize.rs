//! Field coercion for raw CSV values: breed and sex vocabulary, birth
//! dates, ages, scores and flags.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::entities::ganado::SexoGanado;

/// Stored when a row carries no breed at all.
pub const UNKNOWN_BREED: &str = "Sin raza";

/// Minimum score for an animal to be featured.
pub const FEATURED_SCORE: f64 = 90.0;

const BREED_MAPPING: &[(&str, &str)] = &[
    ("FLECKVIEH PPC", "Fleckvieh PPC"),
    ("FLECKVIEH", "Fleckvieh"),
    ("HOLSTEIN", "Holstein"),
    ("BROWN SWISS", "Brown Swiss"),
    ("SIMMENTAL", "Simmental"),
    ("JERSEY", "Jersey"),
    ("ANGUS", "Angus"),
    ("BRAHMAN", "Brahman"),
    ("CRIOLLO", "Criollo"),
    ("FLECKVIEH_PPC", "Fleckvieh PPC"),
    ("HOLSTEIN_PDP", "Holstein PDP"),
    ("HOLSTEIN_PPC", "Holstein PPC"),
    ("JERSEY_PDP", "Jersey PDP"),
    ("JERSEY_PPC", "Jersey PPC"),
    ("BROWN_SWISS_PDP", "Brown Swiss PDP"),
    ("BROWN_SWISS_PPC", "Brown Swiss PPC"),
    ("FLECKVIEH_PDP", "Fleckvieh PDP"),
];

const MALE_MARKERS: &[&str] = &["macho", "toro", "torete"];

/// Maps a free-text breed to its canonical display form. Unknown breeds pass
/// through unchanged.
pub fn normalize_breed(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN_BREED.to_string();
    }

    let key = trimmed.to_uppercase();
    BREED_MAPPING
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Binary sex classification. Anything without a male marker is `Hembra`,
/// including blank input.
pub fn classify_sex(raw: &str) -> SexoGanado {
    let lower = raw.to_lowercase();
    if MALE_MARKERS.iter().any(|m| lower.contains(m)) {
        return SexoGanado::Macho;
    }
    if lower.trim().is_empty() {
        tracing::debug!("Blank sex value, defaulting to HEMBRA");
    }
    SexoGanado::Hembra
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a birth date. Unparseable values become `None` rather than a row
/// error.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }

    tracing::warn!(value = raw, "Invalid birth date, storing none");
    None
}

/// Age in 30-day months, from the birth date when known, else from the
/// `diasNacida` column, else zero. A started day counts as a whole one.
pub fn age_in_months(birth: Option<NaiveDate>, dias_nacida: &str, today: NaiveDate) -> i64 {
    if let Some(birth) = birth {
        return ((today - birth).num_days().abs() + 1) / 30;
    }
    let raw = dias_nacida.trim();
    if raw.is_empty() {
        return 0;
    }
    match leading_integer(raw) {
        Some(days) => days / 30,
        None => {
            tracing::warn!(value = raw, "Invalid diasNacida, assuming age 0");
            0
        }
    }
}

/// Leading signed integer of `raw`, ignoring whatever follows the digits
/// (`"400.0"` and `"400 dias"` both read as 400).
fn leading_integer(raw: &str) -> Option<i64> {
    let unsigned = raw.strip_prefix(&['-', '+'][..]).unwrap_or(raw);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    if digits.is_empty() {
        return None;
    }
    let sign_len = raw.len() - unsigned.len();
    raw[..sign_len + digits.len()].parse().ok()
}

pub fn parse_score(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::warn!(value = raw, "Invalid score, storing none");
            None
        }
    }
}

pub fn is_featured(score: Option<f64>) -> bool {
    score.is_some_and(|s| s >= FEATURED_SCORE)
}

pub fn parse_auction_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

pub fn optional_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}
