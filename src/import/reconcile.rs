//! Duplicate detection and merge strategies.
//!
//! An imported record is a duplicate when some existing record has the same
//! `id`, or the same `date` and exact `title`. The first matching record in
//! store order is the one a `Replace` overwrites.

use crate::models::EventRecord;
use crate::store::EventStore;
use clap::ValueEnum;
use serde::Serialize;

/// What to do with imported records that match existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateStrategy {
    /// Overwrite the matching record in place.
    Replace,
    /// Give the duplicate a fresh id and append it.
    KeepBoth,
    /// Discard the whole pending import.
    Cancel,
}

impl DuplicateStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateStrategy::Replace => "replace",
            DuplicateStrategy::KeepBoth => "keep-both",
            DuplicateStrategy::Cancel => "cancel",
        }
    }
}

/// Imported records split against the current collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub new_events: Vec<EventRecord>,
    pub duplicates: Vec<EventRecord>,
}

impl Partition {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    pub fn total(&self) -> usize {
        self.new_events.len() + self.duplicates.len()
    }
}

/// Result of applying a partition to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: usize,
    pub replaced: usize,
    pub cancelled: bool,
}

impl MergeOutcome {
    pub fn imported(&self) -> usize {
        self.added + self.replaced
    }
}

pub fn is_duplicate(existing: &EventRecord, imported: &EventRecord) -> bool {
    existing.id == imported.id || existing.same_date_and_title(imported)
}

/// Classify every imported record as new or duplicate of `current`.
pub fn partition(imported: Vec<EventRecord>, current: &[EventRecord]) -> Partition {
    let (duplicates, new_events) = imported
        .into_iter()
        .partition(|ev| current.iter().any(|existing| is_duplicate(existing, ev)));
    Partition {
        new_events,
        duplicates,
    }
}

/// Plain append used when there is nothing to reconcile. Ids that collide
/// (inside the batch or with the store) are moved past `id_base`.
pub fn append(events: Vec<EventRecord>, store: &mut EventStore, id_base: i64) -> MergeOutcome {
    let added = events.len();
    for ev in events {
        store.push_unique(ev, id_base);
    }
    MergeOutcome {
        added,
        ..MergeOutcome::default()
    }
}

/// Merge a partition according to `strategy`. `id_base` is the epoch-ms
/// seed for freshly allocated ids. The store is not re-sorted here.
pub fn resolve(
    strategy: DuplicateStrategy,
    partition: Partition,
    store: &mut EventStore,
    id_base: i64,
) -> MergeOutcome {
    let Partition {
        new_events,
        duplicates,
    } = partition;

    match strategy {
        DuplicateStrategy::Cancel => MergeOutcome {
            cancelled: true,
            ..MergeOutcome::default()
        },
        DuplicateStrategy::KeepBoth => {
            let mut out = MergeOutcome::default();
            for mut dup in duplicates {
                dup.id = store.fresh_id(id_base);
                store.push_unique(dup, id_base);
                out.added += 1;
            }
            out.added += append(new_events, store, id_base).added;
            out
        }
        DuplicateStrategy::Replace => {
            let mut out = MergeOutcome::default();
            for dup in duplicates {
                // Matched against the live store: an earlier overwrite in
                // this batch may have taken the record away.
                match store.position_of_match(&dup) {
                    Some(idx) => {
                        store.overwrite_at(idx, dup, id_base);
                        out.replaced += 1;
                    }
                    None => {
                        store.push_unique(dup, id_base);
                        out.added += 1;
                    }
                }
            }
            out.added += append(new_events, store, id_base).added;
            out
        }
    }
}
