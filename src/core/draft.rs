use crate::db::drafts::{clear_draft, load_draft, save_draft};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::iso_timestamp;
use crate::models::{Draft, SavedDraft};
use chrono::{DateTime, Utc};

pub struct DraftLogic;

impl DraftLogic {
    /// Save `draft` over the current one: given fields replace stored ones,
    /// missing fields keep their stored value. Empty drafts are not saved.
    pub fn save(pool: &mut DbPool, draft: Draft, now: DateTime<Utc>) -> AppResult<Option<SavedDraft>> {
        let merged = match load_draft(&pool.conn)? {
            Some(saved) => draft.merged_over(saved.draft),
            None => draft,
        };
        if merged.is_empty() {
            return Ok(None);
        }

        let saved_at = iso_timestamp(now);
        save_draft(&pool.conn, &merged, &saved_at)?;
        Ok(Some(SavedDraft {
            draft: merged,
            saved_at,
        }))
    }

    pub fn load(pool: &mut DbPool) -> AppResult<Option<SavedDraft>> {
        load_draft(&pool.conn)
    }

    pub fn discard(pool: &mut DbPool) -> AppResult<bool> {
        clear_draft(&pool.conn)
    }
}
