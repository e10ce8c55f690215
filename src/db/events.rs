use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, EventType};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Size of the serialized collection compared with the configured quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageUsage {
    pub used: usize,
    pub limit: usize,
}

impl StorageUsage {
    pub fn percent(&self) -> usize {
        if self.limit == 0 {
            return 100;
        }
        self.used * 100 / self.limit
    }
}

pub fn map_row(row: &Row) -> Result<EventRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("type")?;
    let kind = EventType::et_from_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    Ok(EventRecord {
        id: row.get("id")?,
        date,
        kind,
        route: row.get("route")?,
        title: row.get("title")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

/// Load the whole collection (unsorted; `EventStore::new` orders it).
pub fn load_all(conn: &Connection) -> AppResult<Vec<EventRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, type, route, title, description, created_at FROM events",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Bytes the collection takes once serialized as JSON.
pub fn measure(events: &[EventRecord], limit: usize) -> AppResult<StorageUsage> {
    let used = serde_json::to_string(events)?.len();
    Ok(StorageUsage { used, limit })
}

/// Replace the stored collection with `events` in one transaction.
///
/// Refuses with `AppError::StorageQuota` when the serialized collection is
/// larger than `limit`; nothing is written in that case.
pub fn save_all(
    conn: &mut Connection,
    events: &[EventRecord],
    limit: usize,
) -> AppResult<StorageUsage> {
    let usage = measure(events, limit)?;
    if usage.used > usage.limit {
        return Err(AppError::StorageQuota {
            used: usage.used,
            limit: usage.limit,
        });
    }

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM events", [])?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO events (id, date, type, route, title, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for ev in events {
            stmt.execute(params![
                ev.id,
                ev.date_str(),
                ev.kind.as_str(),
                ev.route,
                ev.title,
                ev.description,
                ev.created_at,
            ])?;
        }
    }
    tx.commit()?;

    Ok(usage)
}
