use crate::cli::parser::Commands;
use crate::cli::commands::flush_and_warn;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::draft::DraftLogic;
use crate::core::form;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::Draft;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::Utc;

/// Record a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields, from_draft } = cmd {
        let mut session = Session::open(cfg)?;

        //
        // 1. Collect the form: CLI values, then draft, then today's date
        //
        let mut input = Draft::from(fields);
        if *from_draft {
            match DraftLogic::load(&mut session.pool)? {
                Some(saved) => {
                    info(format!("Using draft saved at {}", saved.saved_at));
                    input = input.merged_over(saved.draft);
                }
                None => warning("No saved draft, using command line values only."),
            }
        }
        if input.date.is_none() {
            input.date = Some(date::today().format("%Y-%m-%d").to_string());
        }

        //
        // 2. Validate and insert
        //
        let valid = form::validate(&input, date::today())?;
        let ev = AddLogic::apply(&mut session.store, valid, Utc::now());

        //
        // 3. Persist, clear the draft, audit
        //
        if flush_and_warn(&mut session).is_saved() {
            DraftLogic::discard(&mut session.pool)?;
            session.audit("add", &ev.id.to_string(), &ev.title);
        }

        success(format!("Evento guardado (id {})", ev.id));
    }
    Ok(())
}
