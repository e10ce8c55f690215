use crate::errors::AppResult;
use crate::models::{Draft, SavedDraft};
use rusqlite::{Connection, OptionalExtension, params};

pub fn save_draft(conn: &Connection, draft: &Draft, saved_at: &str) -> AppResult<()> {
    let payload = serde_json::to_string(draft)?;
    conn.execute(
        "INSERT INTO drafts (id, payload, saved_at) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET payload = excluded.payload, saved_at = excluded.saved_at",
        params![payload, saved_at],
    )?;
    Ok(())
}

pub fn load_draft(conn: &Connection) -> AppResult<Option<SavedDraft>> {
    let row: Option<(String, String)> = conn
        .query_row("SELECT payload, saved_at FROM drafts WHERE id = 1", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .optional()?;

    match row {
        Some((payload, saved_at)) => Ok(Some(SavedDraft {
            draft: serde_json::from_str(&payload)?,
            saved_at,
        })),
        None => Ok(None),
    }
}

/// Returns true when a draft was removed.
pub fn clear_draft(conn: &Connection) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM drafts", [])?;
    Ok(n > 0)
}
