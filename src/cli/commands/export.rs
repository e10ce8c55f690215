use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{ExportLogic, ExportTarget};
use crate::db::events::load_all;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::warning;
use chrono::Local;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { dir, file, force } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let store = EventStore::new(load_all(&pool.conn)?);

        let target = match (file, dir) {
            (Some(f), _) => ExportTarget::File(PathBuf::from(f)),
            (None, Some(d)) => ExportTarget::Dir(PathBuf::from(d)),
            (None, None) => ExportTarget::Dir(PathBuf::from(&cfg.export_dir)),
        };

        match ExportLogic::export(store.events(), &target, *force, Local::now())? {
            Some(path) => ttlog_quiet(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{} events exported", store.len()),
            ),
            None => warning("No hay eventos para exportar"),
        }
    }
    Ok(())
}
