//! CSV export in the canonical column layout.

use crate::import::CANONICAL_HEADERS;
use crate::models::EventRecord;

const BOM: &str = "\u{feff}";

/// Wrap in double quotes, doubling any inner quote.
pub(crate) fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn record_line(ev: &EventRecord) -> String {
    [
        ev.id.to_string(),
        ev.date_str(),
        ev.kind.as_str().to_string(),
        quoted(&ev.route),
        quoted(&ev.title),
        quoted(&ev.description),
        ev.created_at.clone().unwrap_or_default(),
    ]
    .join(",")
}

/// Serialize the collection: BOM, canonical header, one line per record.
/// Text columns are always quoted so embedded commas, quotes and newlines
/// survive a re-import.
pub fn write_csv(events: &[EventRecord]) -> String {
    let mut out = String::from(BOM);
    out.push_str(&CANONICAL_HEADERS.join(","));
    out.push('\n');
    for ev in events {
        out.push_str(&record_line(ev));
        out.push('\n');
    }
    out
}
