use rusqlite::{Connection, Result};

/// Initialize the database schema. Safe to call on every open.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY,
            date        TEXT NOT NULL,          -- YYYY-MM-DD
            type        TEXT NOT NULL CHECK (type IN (
                            'driver-registration','first-day-driver','driver-resignation',
                            'incident','observation','other')),
            route       TEXT NOT NULL DEFAULT '',
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at  TEXT                    -- ISO 8601, may be missing
        );

        CREATE TABLE IF NOT EXISTS drafts (
            id       INTEGER PRIMARY KEY CHECK (id = 1),
            payload  TEXT NOT NULL,             -- JSON snapshot of the form
            saved_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        ",
    )
}
