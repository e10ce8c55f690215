use crate::cli::commands::{ask_confirmation, flush_and_warn};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Del { id, yes } => {
            let mut session = Session::open(cfg)?;
            let title = session
                .store
                .get(*id)
                .map(|e| e.title.clone())
                .ok_or(AppError::EventNotFound(*id))?;

            if !*yes && !ask_confirmation(&format!("Delete event {id} \"{title}\"?")) {
                info("Operation cancelled.");
                return Ok(());
            }

            DeleteLogic::apply(&mut session.store, *id)?;
            if flush_and_warn(&mut session).is_saved() {
                session.audit("del", &id.to_string(), &title);
            }
            success("Evento eliminado");
        }
        Commands::Clear { yes } => {
            if !*yes
                && !ask_confirmation("Delete ALL events? This action is irreversible.")
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut session = Session::open(cfg)?;
            let n = DeleteLogic::clear_all(&mut session.store);
            if flush_and_warn(&mut session).is_saved() {
                session.audit("clear", "", &format!("{n} events removed"));
            }
            success(format!("Todos los eventos han sido eliminados ({n})"));
        }
        _ => {}
    }
    Ok(())
}
