use super::form::ValidForm;
use crate::models::EventRecord;
use crate::store::EventStore;
use chrono::{DateTime, Utc};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Insert a new record built from `form`. The id is the current epoch
    /// millisecond, bumped until unused; createdAt is `now`.
    pub fn apply(store: &mut EventStore, form: ValidForm, now: DateTime<Utc>) -> EventRecord {
        let id = store.fresh_id(now.timestamp_millis());
        let ev = EventRecord::new(
            id,
            form.date,
            form.kind,
            form.route,
            form.title,
            form.description,
            now,
        );
        store.push_unique(ev.clone(), id);
        store.sort();
        ev
    }
}
