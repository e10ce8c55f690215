#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bitacora::models::{EventRecord, EventType};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bitacora() -> Command {
    cargo_bin_cmd!("bitacora")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bitacora.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh test DB through the CLI.
pub fn init_db(db_path: &str) {
    bitacora()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fixed clock used by library tests: 2024-06-01T12:00:00Z.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn record(id: i64, day: &str, title: &str) -> EventRecord {
    EventRecord {
        id,
        date: date(day),
        kind: EventType::Incident,
        route: String::new(),
        title: title.to_string(),
        description: format!("{title} description"),
        created_at: Some(format!("{day}T08:00:00.000Z")),
    }
}

pub const HEADER: &str = "ID,Fecha,Tipo,Ruta,Título,Descripción,Creado";
