//! Import orchestrator: raw CSV text → merged, sorted and persisted store,
//! plus a summary for the user.

use super::session::{Persisted, Session};
use crate::errors::AppResult;
use crate::import::reconcile::DuplicateStrategy;
use crate::import::{PendingImport, merge, parse_csv};
use crate::store::EventStore;
use chrono::{DateTime, Utc};

/// What the caller is shown before choosing a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateSummary {
    pub duplicates: usize,
    pub new_events: usize,
    pub errors: usize,
}

/// Result summary of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records merged into the store (added + replaced).
    pub imported_count: usize,
    pub replaced_count: usize,
    pub error_messages: Vec<String>,
    /// Strategy used; `None` when no duplicates were found.
    pub strategy: Option<DuplicateStrategy>,
    pub cancelled: bool,
    /// Non-fatal problem to show at warning level (empty file, no valid
    /// rows, storage failure).
    pub warning: Option<String>,
}

impl ImportReport {
    fn warn(msg: &str, errors: Vec<String>) -> Self {
        Self {
            warning: Some(msg.to_string()),
            error_messages: errors,
            ..Self::default()
        }
    }

    pub fn is_warning(&self) -> bool {
        self.warning.is_some() || !self.error_messages.is_empty() || self.cancelled
    }

    /// One-line summary in the application language.
    pub fn summary(&self) -> String {
        if self.cancelled {
            return "Importación cancelada".to_string();
        }
        let mut msg = format!(
            "Se importaron {} evento(s) exitosamente",
            self.imported_count
        );
        if self.replaced_count > 0 {
            msg.push_str(&format!(" ({} reemplazado(s))", self.replaced_count));
        }
        if !self.error_messages.is_empty() {
            msg.push_str(&format!(
                ". {} error(es) encontrado(s)",
                self.error_messages.len()
            ));
        }
        msg
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Pure part of the pipeline: parse `text`, merge into `store`.
    ///
    /// `decide` is only called when duplicates exist. The store is left
    /// untouched on a structural error, an empty file, zero valid rows or a
    /// cancel decision.
    pub fn merge_text<F>(
        store: &mut EventStore,
        text: &str,
        now: DateTime<Utc>,
        decide: F,
    ) -> AppResult<ImportReport>
    where
        F: FnOnce(&DuplicateSummary) -> DuplicateStrategy,
    {
        let Some(pending) = parse_csv(text, store.events(), now)? else {
            return Ok(ImportReport::warn(
                "El archivo CSV está vacío o no tiene el formato correcto",
                Vec::new(),
            ));
        };

        if pending.is_empty() {
            return Ok(ImportReport::warn(
                "No se encontraron eventos válidos para importar",
                pending.errors,
            ));
        }

        let strategy = pending.needs_decision().then(|| decide(&summarize(&pending)));
        let errors = pending.errors.clone();
        let outcome = merge(
            pending,
            strategy.unwrap_or(DuplicateStrategy::KeepBoth),
            store,
            now.timestamp_millis(),
        );

        Ok(ImportReport {
            imported_count: outcome.imported(),
            replaced_count: outcome.replaced,
            error_messages: errors,
            strategy,
            cancelled: outcome.cancelled,
            warning: None,
        })
    }

    /// Full run against a session: merge, then flush when anything changed.
    /// A failed flush becomes the report warning.
    pub fn run<F>(
        session: &mut Session,
        text: &str,
        now: DateTime<Utc>,
        decide: F,
    ) -> AppResult<ImportReport>
    where
        F: FnOnce(&DuplicateSummary) -> DuplicateStrategy,
    {
        let mut report = Self::merge_text(&mut session.store, text, now, decide)?;

        if report.imported_count > 0 {
            let persisted = session.flush();
            if let Some(w) = persisted.warning(session.warn_percent()) {
                report.warning = Some(w);
            }
            if persisted.is_saved() {
                session.audit(
                    "import",
                    report.strategy.map(|s| s.as_str()).unwrap_or("add"),
                    &report.summary(),
                );
            } else if let Persisted::Failed(msg) = &persisted {
                log::warn!("import kept in memory only: {msg}");
            }
        }

        Ok(report)
    }
}

fn summarize(pending: &PendingImport) -> DuplicateSummary {
    DuplicateSummary {
        duplicates: pending.partition.duplicates.len(),
        new_events: pending.partition.new_events.len(),
        errors: pending.errors.len(),
    }
}
