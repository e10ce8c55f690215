pub mod add;
pub mod config;
pub mod del;
pub mod draft;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;

use crate::cli::parser::EventFields;
use crate::core::session::{Persisted, Session};
use crate::models::Draft;
use crate::ui::messages::warning;
use std::io::{self, Write};

impl From<&EventFields> for Draft {
    fn from(f: &EventFields) -> Self {
        Draft {
            date: f.date.clone(),
            kind: f.kind,
            route: f.route.clone(),
            title: f.title.clone(),
            description: f.description.clone(),
        }
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Flush the session and surface storage problems as warnings.
pub(crate) fn flush_and_warn(session: &mut Session) -> Persisted {
    let persisted = session.flush();
    if let Some(w) = persisted.warning(session.warn_percent()) {
        warning(w);
    }
    persisted
}
