//! Unified application error type.
//! All modules (db, core, cli, import, export) return AppError to keep the
//! error handling consistent. Row-level import problems are NOT errors: they
//! travel inside the import report as plain messages.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage quota exceeded: {used} bytes needed, limit is {limit} bytes")]
    StorageQuota { used: usize, limit: usize },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Date is in the future: {0}")]
    FutureDate(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // CSV import
    // ---------------------------
    /// Structural problem: the header lacks one or more required columns.
    #[error("Error en estructura CSV: Faltan las siguientes columnas: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No event found with id {0}")]
    EventNotFound(i64),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
