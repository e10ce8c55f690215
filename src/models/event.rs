use super::event_type::EventType;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One logged occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i64,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default)]
    pub route: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>, // ISO 8601, kept verbatim
}

impl EventRecord {
    /// Record created from the command line: id and createdAt come from `now`.
    pub fn new(
        id: i64,
        date: NaiveDate,
        kind: EventType,
        route: String,
        title: String,
        description: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            date,
            kind,
            route,
            title,
            description,
            created_at: Some(iso_timestamp(now)),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Sort key in epoch milliseconds: createdAt when it parses, otherwise
    /// local midnight of `date`.
    pub fn sort_key(&self) -> i64 {
        self.created_at
            .as_deref()
            .and_then(timestamp_millis)
            .unwrap_or_else(|| self.midnight_millis())
    }

    fn midnight_millis(&self) -> i64 {
        let naive = self.date.and_time(chrono::NaiveTime::MIN);
        naive
            .and_local_timezone(Local)
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| naive.and_utc().timestamp_millis())
    }

    /// Same date and exact same title.
    pub fn same_date_and_title(&self, other: &EventRecord) -> bool {
        self.date == other.date && self.title == other.title
    }
}

/// Accepted layouts for an ISO 8601 timestamp without offset; read as local time.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Epoch milliseconds of an ISO 8601 timestamp: RFC 3339 with an offset, or
/// a naive date-time taken as local time. `None` for anything else.
pub fn timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .or_else(|| Some(naive.and_utc().timestamp_millis()))
}

/// ISO 8601 in UTC with millisecond precision (`2024-01-01T10:00:00.000Z`).
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
