use crate::cli::commands::flush_and_warn;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::form;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::Draft;
use crate::ui::messages::success;
use crate::utils::date;

/// Edit an existing event. Options not given keep their current value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        let mut session = Session::open(cfg)?;
        let current = session
            .store
            .get(*id)
            .cloned()
            .ok_or(AppError::EventNotFound(*id))?;

        let base = Draft {
            date: Some(current.date_str()),
            kind: Some(current.kind),
            route: Some(current.route.clone()),
            title: Some(current.title.clone()),
            description: Some(current.description.clone()),
        };
        let input = Draft::from(fields).merged_over(base);

        let valid = form::validate(&input, date::today())?;
        let ev = EditLogic::apply(&mut session.store, *id, valid)?;

        if flush_and_warn(&mut session).is_saved() {
            session.audit("edit", &ev.id.to_string(), &ev.title);
        }
        success(format!("Evento {} actualizado", ev.id));
    }
    Ok(())
}
