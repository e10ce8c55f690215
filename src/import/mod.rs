//! CSV import pipeline: tokenizer → header mapper → row validator →
//! duplicate reconciler. Nothing in here touches storage; the orchestrator
//! in `core::import` drives it and persists the result.

pub mod header;
pub mod reconcile;
pub mod tokenizer;
pub mod validator;

use crate::errors::AppResult;
use crate::models::EventRecord;
use chrono::{DateTime, Utc};
use header::ColumnMap;
use reconcile::{DuplicateStrategy, MergeOutcome, Partition};

pub use header::{CANONICAL_HEADERS, Column};
pub use reconcile::{append, is_duplicate, partition, resolve};
pub use tokenizer::{Row, tokenize};
pub use validator::{RowError, validate_row};

/// Records parsed from a file, split against the current collection, with
/// the row errors found on the way. Waits for a strategy when duplicates
/// are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingImport {
    pub partition: Partition,
    pub errors: Vec<String>,
    /// Data rows seen (valid or not), header excluded.
    pub data_rows: usize,
}

impl PendingImport {
    pub fn needs_decision(&self) -> bool {
        self.partition.has_duplicates()
    }

    pub fn valid_count(&self) -> usize {
        self.partition.total()
    }

    pub fn is_empty(&self) -> bool {
        self.partition.total() == 0
    }
}

/// Parse, validate and classify `text` against `current`.
///
/// Returns `Ok(None)` for an empty or header-only file. A header missing a
/// required column is the only error.
pub fn parse_csv(
    text: &str,
    current: &[EventRecord],
    now: DateTime<Utc>,
) -> AppResult<Option<PendingImport>> {
    let mut rows = tokenize(text).into_iter();
    let Some(header) = rows.next() else {
        return Ok(None);
    };
    let rest: Vec<Row> = rows.collect();
    if rest.is_empty() {
        return Ok(None);
    }

    let map = ColumnMap::from_header(&header.fields)?;

    let mut valid = Vec::new();
    let mut errors = Vec::new();
    for row in &rest {
        match validate_row(row, &map, now) {
            Ok(ev) => valid.push(ev),
            Err(e) => errors.push(e.to_string()),
        }
    }

    Ok(Some(PendingImport {
        partition: partition(valid, current),
        errors,
        data_rows: rest.len(),
    }))
}

/// Merge a pending import into `store`. With no duplicates the records are
/// appended and `strategy` is ignored.
pub fn merge(
    pending: PendingImport,
    strategy: DuplicateStrategy,
    store: &mut crate::store::EventStore,
    id_base: i64,
) -> MergeOutcome {
    let outcome = if pending.needs_decision() {
        resolve(strategy, pending.partition, store, id_base)
    } else {
        let Partition { new_events, .. } = pending.partition;
        append(new_events, store, id_base)
    };
    if !outcome.cancelled {
        store.sort();
    }
    outcome
}
