use crate::errors::{AppError, AppResult};
use crate::models::{Draft, EventType};
use crate::utils::date;
use chrono::NaiveDate;

/// Fields of a manually entered record that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidForm {
    pub date: NaiveDate,
    pub kind: EventType,
    pub route: String,
    pub title: String,
    pub description: String,
}

/// Validate form input. Unlike the import path, the date may not be in the
/// future and only canonical types are accepted (clap already enforces it).
pub fn validate(form: &Draft, today: NaiveDate) -> AppResult<ValidForm> {
    let date_raw = form
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingField("date"))?;
    let date = date::parse_date(date_raw).ok_or_else(|| AppError::InvalidDate(date_raw.into()))?;
    if date > today {
        return Err(AppError::FutureDate(date_raw.into()));
    }

    let kind = form.kind.ok_or(AppError::MissingField("type"))?;

    let title = required_text(&form.title, "title")?;
    let description = required_text(&form.description, "description")?;

    Ok(ValidForm {
        date,
        kind,
        route: unix_newlines(form.route.as_deref().unwrap_or("").trim()),
        title,
        description,
    })
}

fn required_text(value: &Option<String>, name: &'static str) -> AppResult<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(unix_newlines)
        .ok_or(AppError::MissingField(name))
}

/// Stored text only ever contains `\n` line breaks.
fn unix_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
