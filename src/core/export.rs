use crate::errors::AppResult;
use crate::export::{ensure_writable, export_filename, notify_export_success, write_csv};
use crate::models::EventRecord;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the CSV goes.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    /// Directory; the file name is generated from the current time.
    Dir(PathBuf),
    File(PathBuf),
}

impl ExportTarget {
    pub fn resolve(&self, now: DateTime<Local>) -> PathBuf {
        match self {
            ExportTarget::Dir(dir) => dir.join(export_filename(now)),
            ExportTarget::File(path) => path.clone(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` as CSV. Returns `None` when there is nothing to export.
    pub fn export(
        events: &[EventRecord],
        target: &ExportTarget,
        force: bool,
        now: DateTime<Local>,
    ) -> AppResult<Option<PathBuf>> {
        if events.is_empty() {
            return Ok(None);
        }

        let path = target.resolve(now);
        ensure_writable(&path, force)?;
        write_file(&path, &write_csv(events))?;
        notify_export_success(&path);
        Ok(Some(path))
    }
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
