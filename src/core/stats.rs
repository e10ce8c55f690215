use crate::models::{EventRecord, EventType};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub today: usize,
    /// One entry per canonical type, in catalogue order.
    pub per_type: Vec<(EventType, usize)>,
}

impl Statistics {
    pub fn compute(events: &[EventRecord], today: NaiveDate) -> Self {
        let per_type = EventType::ALL
            .iter()
            .map(|t| (*t, events.iter().filter(|e| e.kind == *t).count()))
            .collect();

        Self {
            total: events.len(),
            today: events.iter().filter(|e| e.date == today).count(),
            per_type,
        }
    }

    pub fn count_of(&self, kind: EventType) -> usize {
        self.per_type
            .iter()
            .find(|(t, _)| *t == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
