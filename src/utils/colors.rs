//! ANSI color helper utilities for terminal output.

use crate::models::EventType;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_type(kind: EventType) -> &'static str {
    match kind {
        EventType::DriverRegistration => GREEN,
        EventType::FirstDayDriver => CYAN,
        EventType::DriverResignation => MAGENTA,
        EventType::Incident => RED,
        EventType::Observation => BLUE,
        EventType::Other => YELLOW,
    }
}

/// Grey placeholder for empty optional values, the value itself otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
