use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::store::EventStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove a single record.
    pub fn apply(store: &mut EventStore, id: i64) -> AppResult<EventRecord> {
        store.remove(id).ok_or(AppError::EventNotFound(id))
    }

    /// Remove every record, returning how many were dropped.
    pub fn clear_all(store: &mut EventStore) -> usize {
        let n = store.len();
        store.clear();
        n
    }
}
