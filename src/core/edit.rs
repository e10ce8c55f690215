use super::form::ValidForm;
use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::store::EventStore;

pub struct EditLogic;

impl EditLogic {
    /// Replace the content of record `id`; id and createdAt stay as they were.
    pub fn apply(store: &mut EventStore, id: i64, form: ValidForm) -> AppResult<EventRecord> {
        let current = store.get(id).cloned().ok_or(AppError::EventNotFound(id))?;
        let replacement = EventRecord {
            date: form.date,
            kind: form.kind,
            route: form.route,
            title: form.title,
            description: form.description,
            ..current
        };
        store.update(id, replacement);
        store.get(id).cloned().ok_or(AppError::EventNotFound(id))
    }
}
