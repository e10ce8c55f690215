use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{DuplicateSummary, ImportLogic, ImportReport};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::import::reconcile::DuplicateStrategy;
use crate::ui::messages::{info, success, warning};
use chrono::Utc;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// How many row errors are printed before "... and N more".
const MAX_ERRORS_SHOWN: usize = 10;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, on_duplicate } = cmd {
        let path = Path::new(file);
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("csv"));
        if !is_csv {
            warning(format!("Por favor selecciona un archivo CSV: {file}"));
            return Ok(());
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);

        let mut session = Session::open(cfg)?;
        let preset = *on_duplicate;
        let report = ImportLogic::run(&mut session, &text, Utc::now(), |summary| {
            preset.unwrap_or_else(|| ask_strategy(summary))
        })?;

        print_report(&report);
    }
    Ok(())
}

/// Interactive choice shown when duplicates are found.
fn ask_strategy(summary: &DuplicateSummary) -> DuplicateStrategy {
    warning(format!(
        "Se encontraron {} eventos duplicados y {} eventos nuevos.",
        summary.duplicates, summary.new_events
    ));
    println!("¿Qué deseas hacer con los eventos duplicados?");
    println!("  [r] Reemplazar duplicados");
    println!("  [k] Mantener ambos");
    println!("  [c] Cancelar");
    print!("Choice [r/k/C]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_err() {
        return DuplicateStrategy::Cancel;
    }
    match s.trim().to_lowercase().as_str() {
        "r" | "replace" => DuplicateStrategy::Replace,
        "k" | "keep" | "keep-both" => DuplicateStrategy::KeepBoth,
        _ => DuplicateStrategy::Cancel,
    }
}

fn print_report(report: &ImportReport) {
    if report.cancelled {
        info(report.summary());
        return;
    }
    if let Some(w) = &report.warning {
        warning(w);
    }
    if report.imported_count > 0 {
        if report.is_warning() {
            warning(report.summary());
        } else {
            success(report.summary());
        }
    }

    for msg in report.error_messages.iter().take(MAX_ERRORS_SHOWN) {
        println!("  - {msg}");
    }
    if report.error_messages.len() > MAX_ERRORS_SHOWN {
        println!(
            "  ... y {} error(es) más",
            report.error_messages.len() - MAX_ERRORS_SHOWN
        );
    }
}
