use crate::cli::parser::{Commands, DraftAction};
use crate::config::Config;
use crate::core::draft::DraftLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Draft;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Draft { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            DraftAction::Save { fields } => {
                match DraftLogic::save(&mut pool, Draft::from(fields), Utc::now())? {
                    Some(saved) => success(format!("Borrador guardado ({})", saved.saved_at)),
                    None => info("Nothing to save: the draft is empty."),
                }
            }
            DraftAction::Show => match DraftLogic::load(&mut pool)? {
                Some(saved) => {
                    let d = &saved.draft;
                    let text = |v: &Option<String>| colorize_optional(v.as_deref().unwrap_or(""));
                    println!("Borrador guardado: {}", saved.saved_at);
                    println!("  Fecha       : {}", text(&d.date));
                    println!(
                        "  Tipo        : {}",
                        colorize_optional(d.kind.map(|k| k.as_str()).unwrap_or(""))
                    );
                    println!("  Ruta        : {}", text(&d.route));
                    println!("  Título      : {}", text(&d.title));
                    println!("  Descripción : {}", text(&d.description));
                }
                None => info("No saved draft."),
            },
            DraftAction::Discard => {
                if DraftLogic::discard(&mut pool)? {
                    success("Borrador descartado");
                } else {
                    info("No saved draft.");
                }
            }
        }
    }
    Ok(())
}
