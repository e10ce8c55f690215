mod common;
use bitacora::core::add::AddLogic;
use bitacora::core::del::DeleteLogic;
use bitacora::core::draft::DraftLogic;
use bitacora::core::edit::EditLogic;
use bitacora::core::form::{ValidForm, validate};
use bitacora::core::list::{EventFilter, paginate};
use bitacora::core::stats::Statistics;
use bitacora::db::events::{load_all, save_all};
use bitacora::db::pool::DbPool;
use bitacora::errors::AppError;
use bitacora::export::write_csv;
use bitacora::import::parse_csv;
use bitacora::models::{Draft, EventType};
use bitacora::store::EventStore;
use bitacora::utils::table::{Column, Table};
use common::{date, fixed_now, record};

fn form(day: &str, title: &str) -> Draft {
    Draft {
        date: Some(day.to_string()),
        kind: Some(EventType::Observation),
        route: Some(" R-2 ".to_string()),
        title: Some(title.to_string()),
        description: Some("texto".to_string()),
    }
}

fn valid(day: &str, title: &str) -> ValidForm {
    validate(&form(day, title), date("2024-06-01")).unwrap()
}

// ---------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------

#[test]
fn test_store_orders_by_created_at_descending() {
    let store = EventStore::new(vec![
        record(1, "2024-01-01", "A"),
        record(2, "2024-03-01", "C"),
        record(3, "2024-02-01", "B"),
    ]);
    let ids: Vec<i64> = store.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_missing_created_at_falls_back_to_date() {
    let mut undated = record(9, "2024-02-15", "NoCreated");
    undated.created_at = None;
    let store = EventStore::new(vec![
        record(1, "2024-01-01", "A"),
        undated,
        record(3, "2024-03-01", "C"),
    ]);
    let ids: Vec<i64> = store.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 9, 1]);
}

#[test]
fn test_created_at_without_offset_orders_within_same_day() {
    let mut early = record(1, "2024-01-01", "Early");
    early.created_at = Some("2024-01-01T08:00:00".to_string());
    let mut late = record(2, "2024-01-01", "Late");
    late.created_at = Some("2024-01-01T20:00:00".to_string());
    let mut minutes = record(3, "2024-01-01", "Minutes");
    minutes.created_at = Some("2024-01-01T12:30".to_string());

    let store = EventStore::new(vec![early, late, minutes]);
    let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Late", "Minutes", "Early"]);
}

// ---------------------------------------------------------------------
// Form validation, add, edit, delete
// ---------------------------------------------------------------------

#[test]
fn test_form_rejects_future_date() {
    let err = validate(&form("2024-06-02", "T"), date("2024-06-01")).unwrap_err();
    assert!(matches!(err, AppError::FutureDate(_)));
}

#[test]
fn test_form_rejects_missing_title_and_bad_date() {
    let err = validate(&form("2024-05-01", "   "), date("2024-06-01")).unwrap_err();
    assert!(matches!(err, AppError::MissingField("title")));

    let err = validate(&form("2024-02-30", "T"), date("2024-06-01")).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_form_trims_route() {
    assert_eq!(valid("2024-05-01", "T").route, "R-2");
}

#[test]
fn test_form_normalizes_crlf_and_survives_csv_round_trip() {
    let mut input = form("2024-05-01", "Dos\r\nlíneas");
    input.description = Some("one\r\ntwo\rthree".to_string());
    let valid = validate(&input, date("2024-06-01")).unwrap();
    assert_eq!(valid.description, "one\ntwo\nthree");
    assert_eq!(valid.title, "Dos\nlíneas");

    let mut store = EventStore::default();
    let ev = AddLogic::apply(&mut store, valid, fixed_now());

    let pending = parse_csv(&write_csv(store.events()), &[], fixed_now())
        .unwrap()
        .unwrap();
    assert!(pending.errors.is_empty());
    assert_eq!(pending.partition.new_events, vec![ev]);
}

#[test]
fn test_add_assigns_time_based_id_and_sorts_first() {
    let mut store = EventStore::new(vec![record(1, "2024-01-01", "A")]);
    let ev = AddLogic::apply(&mut store, valid("2024-05-01", "Nuevo"), fixed_now());

    assert_eq!(ev.id, fixed_now().timestamp_millis());
    assert_eq!(ev.created_at.as_deref(), Some("2024-06-01T12:00:00.000Z"));
    assert_eq!(store.events()[0].id, ev.id);
}

#[test]
fn test_add_twice_in_same_millisecond_keeps_ids_unique() {
    let mut store = EventStore::default();
    let a = AddLogic::apply(&mut store, valid("2024-05-01", "A"), fixed_now());
    let b = AddLogic::apply(&mut store, valid("2024-05-01", "B"), fixed_now());
    assert_ne!(a.id, b.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_edit_keeps_id_and_created_at() {
    let mut store = EventStore::new(vec![record(5, "2024-01-01", "Old")]);
    let ev = EditLogic::apply(&mut store, 5, valid("2024-04-04", "Changed")).unwrap();

    assert_eq!(ev.id, 5);
    assert_eq!(ev.title, "Changed");
    assert_eq!(ev.kind, EventType::Observation);
    assert_eq!(ev.created_at.as_deref(), Some("2024-01-01T08:00:00.000Z"));
}

#[test]
fn test_edit_and_delete_unknown_id() {
    let mut store = EventStore::default();
    assert!(matches!(
        EditLogic::apply(&mut store, 42, valid("2024-04-04", "X")),
        Err(AppError::EventNotFound(42))
    ));
    assert!(matches!(
        DeleteLogic::apply(&mut store, 42),
        Err(AppError::EventNotFound(42))
    ));
}

#[test]
fn test_delete_and_clear() {
    let mut store = EventStore::new(vec![
        record(1, "2024-01-01", "A"),
        record(2, "2024-01-02", "B"),
        record(3, "2024-01-03", "C"),
    ]);
    assert_eq!(DeleteLogic::apply(&mut store, 2).unwrap().title, "B");
    assert_eq!(store.len(), 2);
    assert_eq!(DeleteLogic::clear_all(&mut store), 2);
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------
// Listing and stats
// ---------------------------------------------------------------------

#[test]
fn test_filter_combines_query_date_and_type() {
    let mut a = record(1, "2024-01-01", "Pinchazo");
    a.route = "Norte".to_string();
    let mut b = record(2, "2024-01-01", "Retraso");
    b.kind = EventType::Other;
    let c = record(3, "2024-01-02", "Otro pinchazo");
    let events = vec![a, b, c];

    let by_query = EventFilter {
        query: Some("PINCHAZO".to_string()),
        ..EventFilter::default()
    };
    assert_eq!(by_query.apply(&events).len(), 2);

    let by_route = EventFilter {
        query: Some("norte".to_string()),
        ..EventFilter::default()
    };
    assert_eq!(by_route.apply(&events).len(), 1);

    let combined = EventFilter {
        query: Some("pinchazo".to_string()),
        date: Some(date("2024-01-01")),
        kind: Some(EventType::Incident),
    };
    let hits = combined.apply(&events);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    let blank = EventFilter {
        query: Some("   ".to_string()),
        ..EventFilter::default()
    };
    assert!(!blank.is_active());
    assert_eq!(blank.apply(&events).len(), 3);
}

#[test]
fn test_paginate_clamps_and_reports_range() {
    let events: Vec<_> = (1..=45)
        .map(|i| record(i, "2024-01-01", &format!("E{i}")))
        .collect();
    let refs: Vec<_> = events.iter().collect();

    let page = paginate(refs.clone(), 3, 20);
    assert_eq!(page.total_pages, 3);
    assert_eq!((page.first, page.last), (41, 45));
    assert_eq!(page.items.len(), 5);

    let clamped = paginate(refs.clone(), 99, 20);
    assert_eq!(clamped.page, 3);

    let all = paginate(refs, 1, 0);
    assert_eq!(all.items.len(), 45);
    assert_eq!(all.total_pages, 1);

    let empty = paginate(Vec::new(), 2, 20);
    assert_eq!((empty.page, empty.first, empty.last), (1, 0, 0));
}

#[test]
fn test_stats_counts_today_and_types() {
    let mut other = record(2, "2024-06-01", "B");
    other.kind = EventType::Other;
    let events = vec![record(1, "2024-06-01", "A"), other, record(3, "2024-05-01", "C")];

    let stats = Statistics::compute(&events, date("2024-06-01"));
    assert_eq!(stats.total, 3);
    assert_eq!(stats.today, 2);
    assert_eq!(stats.count_of(EventType::Incident), 2);
    assert_eq!(stats.count_of(EventType::Other), 1);
    assert_eq!(stats.count_of(EventType::FirstDayDriver), 0);
    assert_eq!(stats.per_type.len(), EventType::ALL.len());
}

#[test]
fn test_table_padding_ignores_escape_sequences() {
    let mut table = Table::new(vec![Column::new("A", 6)]);
    table.add_row(vec!["\x1b[Kabc".to_string()]);
    table.add_row(vec!["\x1b[31mab\x1b[0m".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], "\x1b[Kabc    ");
    assert_eq!(lines[3], "\x1b[31mab\x1b[0m     ");
}

// ---------------------------------------------------------------------
// Persistence and drafts
// ---------------------------------------------------------------------

#[test]
fn test_save_all_replaces_collection() {
    let mut pool = DbPool::new(":memory:").unwrap();
    let mut no_created = record(2, "2024-01-02", "B");
    no_created.created_at = None;
    let first = vec![record(1, "2024-01-01", "A"), no_created];
    save_all(&mut pool.conn, &first, 1 << 20).unwrap();
    assert_eq!(EventStore::new(load_all(&pool.conn).unwrap()).len(), 2);

    let second = vec![record(3, "2024-01-03", "C")];
    let usage = save_all(&mut pool.conn, &second, 1 << 20).unwrap();
    assert!(usage.used > 0);
    assert_eq!(load_all(&pool.conn).unwrap(), second);
}

#[test]
fn test_save_all_over_quota_writes_nothing() {
    let mut pool = DbPool::new(":memory:").unwrap();
    save_all(&mut pool.conn, &[record(1, "2024-01-01", "A")], 1 << 20).unwrap();

    let err = save_all(&mut pool.conn, &[record(2, "2024-01-02", "B")], 8).unwrap_err();
    assert!(matches!(err, AppError::StorageQuota { limit: 8, .. }));
    assert_eq!(load_all(&pool.conn).unwrap()[0].id, 1);
}

#[test]
fn test_draft_save_merges_and_discard() {
    let mut pool = DbPool::new(":memory:").unwrap();

    let first = Draft {
        title: Some("Borrador".to_string()),
        ..Draft::default()
    };
    DraftLogic::save(&mut pool, first, fixed_now()).unwrap();

    let second = Draft {
        description: Some("detalle".to_string()),
        ..Draft::default()
    };
    let saved = DraftLogic::save(&mut pool, second, fixed_now()).unwrap().unwrap();
    assert_eq!(saved.draft.title.as_deref(), Some("Borrador"));
    assert_eq!(saved.draft.description.as_deref(), Some("detalle"));

    let loaded = DraftLogic::load(&mut pool).unwrap().unwrap();
    assert_eq!(loaded, saved);

    assert!(DraftLogic::discard(&mut pool).unwrap());
    assert!(DraftLogic::load(&mut pool).unwrap().is_none());
    assert!(!DraftLogic::discard(&mut pool).unwrap());
}

#[test]
fn test_empty_draft_is_not_saved() {
    let mut pool = DbPool::new(":memory:").unwrap();
    assert!(DraftLogic::save(&mut pool, Draft::default(), fixed_now()).unwrap().is_none());
    assert!(DraftLogic::load(&mut pool).unwrap().is_none());
}
