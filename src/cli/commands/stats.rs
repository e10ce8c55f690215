use crate::config::Config;
use crate::core::stats::Statistics;
use crate::db::events::load_all;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_type};
use crate::utils::date;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let events = load_all(&pool.conn)?;
    let stats = Statistics::compute(&events, date::today());

    header("Estadísticas");
    println!("Total de eventos : {}", stats.total);
    println!("Eventos de hoy   : {}", stats.today);
    println!();
    for (kind, n) in &stats.per_type {
        println!("{}{:<26}{} {}", color_for_type(*kind), kind.label(), RESET, n);
    }
    Ok(())
}
