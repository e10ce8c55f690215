mod common;
use bitacora::config::Config;
use bitacora::core::import::ImportLogic;
use bitacora::core::session::Session;
use bitacora::db::events::load_all;
use bitacora::db::pool::DbPool;
use bitacora::errors::AppError;
use bitacora::import::reconcile::DuplicateStrategy;
use bitacora::store::EventStore;
use common::{HEADER, fixed_now, record};

fn csv(rows: &[&str]) -> String {
    let mut s = format!("\u{feff}{HEADER}\n");
    for r in rows {
        s.push_str(r);
        s.push('\n');
    }
    s
}

fn no_decision(_: &bitacora::core::import::DuplicateSummary) -> DuplicateStrategy {
    panic!("no duplicates expected, decision must not be requested")
}

fn memory_session(cfg: &Config) -> Session {
    let pool = DbPool::new(":memory:").unwrap();
    Session::from_pool(pool, cfg).unwrap()
}

#[test]
fn test_three_valid_one_bad_date() {
    let text = csv(&[
        "1,2024-01-01,incident,,\"A\",\"a\",2024-01-01T10:00:00.000Z",
        "2,2024-01-02,observation,,\"B\",\"b\",2024-01-02T10:00:00.000Z",
        "3,01-03-2024,other,,\"C\",\"c\",",
        "4,2024-01-04,delivery,\"R1\",\"D\",\"d\",2024-01-04T10:00:00.000Z",
    ]);
    let mut store = EventStore::default();

    let report = ImportLogic::merge_text(&mut store, &text, fixed_now(), no_decision).unwrap();

    assert_eq!(report.imported_count, 3);
    assert_eq!(report.error_messages.len(), 1);
    assert!(report.error_messages[0].starts_with("Fila 4:"));
    assert_eq!(report.strategy, None);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_missing_required_column_aborts_without_mutation() {
    let text = "ID,Fecha,Tipo,Ruta,Descripción\n1,2024-01-01,other,,desc\n";
    let mut store = EventStore::new(vec![record(1, "2023-12-01", "Old")]);
    let before = store.events().to_vec();

    let err = ImportLogic::merge_text(&mut store, text, fixed_now(), no_decision).unwrap_err();

    assert!(matches!(err, AppError::MissingColumns(ref m) if m == &vec!["Título"]));
    assert_eq!(store.events(), before.as_slice());
}

#[test]
fn test_empty_and_header_only_files_are_warnings() {
    let header_only = format!("{HEADER}\n");
    for text in ["", "\u{feff}", header_only.as_str(), "\n\n"] {
        let mut store = EventStore::default();
        let report = ImportLogic::merge_text(&mut store, text, fixed_now(), no_decision).unwrap();
        assert_eq!(report.imported_count, 0);
        assert!(report.warning.is_some());
        assert!(store.is_empty());
    }
}

#[test]
fn test_no_valid_rows_is_a_warning_with_errors() {
    let text = csv(&["1,bad,other,,\"A\",\"a\",", "2,2024-01-01,other,,\"B\",\"   \","]);
    let mut store = EventStore::default();

    let report = ImportLogic::merge_text(&mut store, &text, fixed_now(), no_decision).unwrap();

    assert_eq!(report.imported_count, 0);
    assert_eq!(report.error_messages.len(), 2);
    assert_eq!(
        report.warning.as_deref(),
        Some("No se encontraron eventos válidos para importar")
    );
    assert!(store.is_empty());
}

#[test]
fn test_decision_requested_only_with_duplicates() {
    let mut store = EventStore::new(vec![record(1, "2024-01-01", "A"), record(2, "2024-01-02", "B")]);
    let text = csv(&[
        "1,2024-01-01,incident,,\"A\",\"new a\",2024-01-01T08:00:00.000Z",
        "9,2024-01-02,incident,,\"B\",\"new b\",2024-01-02T08:00:00.000Z",
        "10,2024-02-02,incident,,\"N\",\"n\",2024-02-02T08:00:00.000Z",
    ]);

    let mut seen = None;
    let report = ImportLogic::merge_text(&mut store, &text, fixed_now(), |s| {
        seen = Some(*s);
        DuplicateStrategy::Replace
    })
    .unwrap();

    let summary = seen.expect("decision requested");
    assert_eq!(summary.duplicates, 2);
    assert_eq!(summary.new_events, 1);
    assert_eq!(report.strategy, Some(DuplicateStrategy::Replace));
    assert_eq!(report.imported_count, 3);
    assert_eq!(report.replaced_count, 2);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(1).unwrap().description, "new a");
    assert_eq!(store.get(9).unwrap().description, "new b");
}

#[test]
fn test_cancel_keeps_pre_import_state() {
    let mut store = EventStore::new(vec![record(1, "2024-01-01", "A")]);
    let before = store.events().to_vec();
    let text = csv(&[
        "1,2024-01-01,incident,,\"A\",\"x\",",
        "5,2024-03-01,incident,,\"New\",\"y\",",
    ]);

    let report =
        ImportLogic::merge_text(&mut store, &text, fixed_now(), |_| DuplicateStrategy::Cancel)
            .unwrap();

    assert!(report.cancelled);
    assert_eq!(report.imported_count, 0);
    assert_eq!(report.summary(), "Importación cancelada");
    assert_eq!(store.events(), before.as_slice());
}

#[test]
fn test_merged_store_is_sorted_newest_first() {
    let mut store = EventStore::new(vec![record(1, "2024-01-15", "Mid")]);
    let text = csv(&[
        "2,2024-01-01,other,,\"Old\",\"o\",2024-01-01T00:00:00.000Z",
        "3,2024-02-01,other,,\"New\",\"n\",2024-02-01T00:00:00.000Z",
    ]);

    ImportLogic::merge_text(&mut store, &text, fixed_now(), no_decision).unwrap();

    let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Mid", "Old"]);
}

#[test]
fn test_run_persists_merged_collection() {
    let cfg = Config::default();
    let mut session = memory_session(&cfg);
    let text = csv(&[
        "1,2024-01-01,incident,,\"A\",\"a\",",
        "2,2024-01-02,incident,,\"B\",\"b\",",
    ]);

    let report = ImportLogic::run(&mut session, &text, fixed_now(), no_decision).unwrap();

    assert_eq!(report.imported_count, 2);
    assert!(report.warning.is_none());
    assert_eq!(load_all(&session.pool.conn).unwrap().len(), 2);
}

#[test]
fn test_storage_failure_is_a_warning_and_memory_survives() {
    let cfg = Config {
        storage_limit_bytes: 10,
        ..Config::default()
    };
    let mut session = memory_session(&cfg);
    let text = csv(&["1,2024-01-01,incident,,\"A\",\"a\","]);

    let report = ImportLogic::run(&mut session, &text, fixed_now(), no_decision).unwrap();

    assert_eq!(report.imported_count, 1);
    assert!(report.warning.unwrap().starts_with("Error al guardar"));
    assert_eq!(session.store.len(), 1);
    assert!(load_all(&session.pool.conn).unwrap().is_empty());
}
