//! In-memory event collection.
//!
//! The store exclusively owns the records for the lifetime of a command and
//! keeps them in display order (createdAt descending, date at midnight when
//! createdAt is missing). Persistence is handled by `db::events`.

use crate::models::EventRecord;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<EventRecord>,
}

impl EventStore {
    pub fn new(events: Vec<EventRecord>) -> Self {
        let mut store = Self { events };
        store.sort();
        store
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    /// Index of the first record matching `imported` by id, or by date+title.
    pub fn position_of_match(&self, imported: &EventRecord) -> Option<usize> {
        self.events
            .iter()
            .position(|e| e.id == imported.id || e.same_date_and_title(imported))
    }

    /// Smallest id >= `base` not used by any stored record.
    pub fn fresh_id(&self, base: i64) -> i64 {
        let used: HashSet<i64> = self.events.iter().map(|e| e.id).collect();
        let mut id = base;
        while used.contains(&id) {
            id += 1;
        }
        id
    }

    /// Append a record, reassigning its id when it is already taken.
    pub fn push_unique(&mut self, mut event: EventRecord, id_base: i64) {
        if self.contains_id(event.id) {
            event.id = self.fresh_id(id_base);
        }
        self.events.push(event);
    }

    /// Overwrite the record at `index`. If the incoming id belongs to a
    /// different record, a fresh id is allocated instead.
    pub fn overwrite_at(&mut self, index: usize, mut event: EventRecord, id_base: i64) {
        let collides = self
            .events
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.id == event.id);
        if collides {
            event.id = self.fresh_id(id_base);
        }
        self.events[index] = event;
    }

    /// Replace content fields in place, keeping id and createdAt.
    pub fn update(&mut self, id: i64, replacement: EventRecord) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(existing) => {
                existing.date = replacement.date;
                existing.kind = replacement.kind;
                existing.route = replacement.route;
                existing.title = replacement.title;
                existing.description = replacement.description;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<EventRecord> {
        let idx = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(idx))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Restore display order: newest createdAt first.
    pub fn sort(&mut self) {
        self.events.sort_by_key(|e| std::cmp::Reverse(e.sort_key()));
    }
}
