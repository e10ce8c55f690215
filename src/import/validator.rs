//! Per-row validation: raw fields → `EventRecord` or the list of problems.

use super::header::{Column, ColumnMap};
use super::tokenizer::Row;
use crate::models::event::{iso_timestamp, timestamp_millis};
use crate::models::{EventRecord, EventType};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date regex"));

/// A rejected row: every field problem found, tagged with the row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub problems: Vec<String>,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fila {}: {}", self.row, self.problems.join("; "))
    }
}

/// Trim used for free text: whitespace plus BOM and no-break space.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}' || c == '\u{a0}')
}

/// Validate one data row. `now` seeds synthesized ids and timestamps.
pub fn validate_row(
    row: &Row,
    map: &ColumnMap,
    now: DateTime<Utc>,
) -> Result<EventRecord, RowError> {
    if row.fields.len() != map.width() {
        log::warn!(
            "row {}: {} fields, header has {}",
            row.number,
            row.fields.len(),
            map.width()
        );
    }

    let fields = row.fields.as_slice();
    let value = |col: Column| map.value(fields, col).map(trim_text).unwrap_or("");
    let mut problems = Vec::new();

    // ID: kept when numeric, otherwise now + row number
    let id = value(Column::Id)
        .parse::<i64>()
        .unwrap_or_else(|_| now.timestamp_millis() + row.number as i64);

    let date = match value(Column::Date) {
        "" => {
            problems.push("Fecha es requerida".to_string());
            None
        }
        raw => match parse_import_date(raw) {
            Some(d) => Some(d),
            None => {
                problems.push("Formato de fecha inválido (debe ser YYYY-MM-DD)".to_string());
                None
            }
        },
    };

    let kind = match value(Column::Type) {
        "" => {
            problems.push("Tipo es requerido".to_string());
            None
        }
        raw => match EventType::from_import_str(raw) {
            Some(t) => Some(t),
            None => {
                problems.push(format!(
                    "Tipo inválido: {raw}. Debe ser uno de: {}",
                    EventType::allowed_list()
                ));
                None
            }
        },
    };

    let route = value(Column::Route).to_string();

    let title = value(Column::Title);
    if title.is_empty() {
        problems.push("Título es requerido".to_string());
    }

    let description = value(Column::Description);
    if description.is_empty() {
        problems.push("Descripción es requerida".to_string());
    }

    // Only a parseable timestamp is kept; it is written back unquoted.
    let created_at = match value(Column::CreatedAt) {
        "" => iso_timestamp(now),
        raw if timestamp_millis(raw).is_some() => raw.to_string(),
        raw => {
            log::warn!("row {}: unreadable createdAt {raw:?}, using now", row.number);
            iso_timestamp(now)
        }
    };

    match (date, kind) {
        (Some(date), Some(kind)) if problems.is_empty() => Ok(EventRecord {
            id,
            date,
            kind,
            route,
            title: title.to_string(),
            description: description.to_string(),
            created_at: Some(created_at),
        }),
        _ => Err(RowError {
            row: row.number,
            problems,
        }),
    }
}

/// `YYYY-MM-DD` that is also a real calendar day.
fn parse_import_date(raw: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
