use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{EventFilter, Page, paginate};
use crate::db::events::load_all;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::store::EventStore;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_type, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{bold, truncate, wrap_indented};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        date: date_filter,
        kind,
        page,
        per_page,
        details,
    } = cmd
    {
        let date = match date_filter {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };
        let filter = EventFilter {
            query: search.clone(),
            date,
            kind: *kind,
        };

        let pool = DbPool::new(&cfg.database)?;
        let store = EventStore::new(load_all(&pool.conn)?);

        let matching = filter.apply(store.events());
        if matching.is_empty() {
            if filter.is_active() {
                info("No hay eventos que coincidan con los filtros.");
            } else {
                info("No hay eventos registrados.");
            }
            return Ok(());
        }

        let page = paginate(matching, *page, per_page.unwrap_or(cfg.items_per_page));
        if *details {
            print_details(&page);
        } else {
            print_table(&page);
        }
        print_footer(&page, store.len(), filter.is_active());
    }
    Ok(())
}

fn print_table(page: &Page) {
    let mut table = Table::new(vec![
        Column::new("ID", 14),
        Column::new("Fecha", 10),
        Column::new("Tipo", 24),
        Column::new("Ruta", 12),
        Column::new("Título", 40),
    ]);
    for ev in &page.items {
        table.add_row(vec![
            ev.id.to_string(),
            ev.date_str(),
            type_cell(ev),
            colorize_optional(&truncate(&ev.route, 12)),
            truncate(&ev.title, 40),
        ]);
    }
    print!("{}", table.render());
}

fn print_details(page: &Page) {
    for ev in &page.items {
        println!(
            "{} {} | {} | {}",
            bold(&format!("#{}", ev.id)),
            date::format_long(ev.date),
            type_cell(ev),
            colorize_optional(&ev.route)
        );
        println!("  {}", bold(&ev.title));
        println!("{}", wrap_indented(&ev.description, 78, "    "));
        if let Some(created) = &ev.created_at {
            println!("  creado: {created}");
        }
        println!();
    }
}

fn type_cell(ev: &EventRecord) -> String {
    format!("{}{}{}", color_for_type(ev.kind), ev.kind.label(), RESET)
}

fn print_footer(page: &Page, total_all: usize, filtered: bool) {
    let mut line = format!(
        "Mostrando {}-{} de {} evento(s) · página {}/{}",
        page.first, page.last, page.total, page.page, page.total_pages
    );
    if filtered {
        line.push_str(&format!(" (filtrados de {total_all})"));
    }
    println!("\n{line}");
}
