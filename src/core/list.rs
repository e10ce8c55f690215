//! Search, filter and pagination over the collection.

use crate::models::{EventRecord, EventType};
use chrono::NaiveDate;

/// Active filters. All of them must match (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring over title, description and route.
    pub query: Option<String>,
    pub date: Option<NaiveDate>,
    pub kind: Option<EventType>,
}

impl EventFilter {
    pub fn is_active(&self) -> bool {
        self.query_lower().is_some() || self.date.is_some() || self.kind.is_some()
    }

    fn query_lower(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty())
    }

    pub fn matches(&self, ev: &EventRecord) -> bool {
        if let Some(q) = self.query_lower() {
            let hit = [&ev.title, &ev.description, &ev.route]
                .iter()
                .any(|text| text.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }
        if self.date.is_some_and(|d| d != ev.date) {
            return false;
        }
        if self.kind.is_some_and(|k| k != ev.kind) {
            return false;
        }
        true
    }

    /// Matching records, collection order preserved.
    pub fn apply<'a>(&self, events: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        events.iter().filter(|ev| self.matches(ev)).collect()
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: Vec<&'a EventRecord>,
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first item shown (0 when empty).
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Slice `items` into page `page` of `per_page` items. `per_page == 0`
/// means everything on a single page. Out-of-range pages are clamped.
pub fn paginate<'a>(items: Vec<&'a EventRecord>, page: usize, per_page: usize) -> Page<'a> {
    let total = items.len();
    let per_page = if per_page == 0 { total.max(1) } else { per_page };
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);
    let slice = items[start.min(total)..end].to_vec();

    Page {
        first: if slice.is_empty() { 0 } else { start + 1 },
        last: end,
        items: slice,
        page,
        total_pages,
        total,
    }
}
