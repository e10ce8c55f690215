use super::event_type::EventType;
use serde::{Deserialize, Serialize};

/// Partially filled form kept outside the event collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EventType>,
    pub route: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Draft {
    /// True when no field carries any text.
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        blank(&self.date)
            && self.kind.is_none()
            && blank(&self.route)
            && blank(&self.title)
            && blank(&self.description)
    }

    /// Fields from `self` win, gaps are filled from `other`.
    pub fn merged_over(self, other: Draft) -> Draft {
        Draft {
            date: self.date.or(other.date),
            kind: self.kind.or(other.kind),
            route: self.route.or(other.route),
            title: self.title.or(other.title),
            description: self.description.or(other.description),
        }
    }
}

/// Draft as persisted, with the time it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDraft {
    pub draft: Draft,
    pub saved_at: String,
}
