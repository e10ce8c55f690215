mod csv_writer;
mod fs_utils;

pub use csv_writer::write_csv;
pub(crate) use fs_utils::ensure_writable;

use crate::ui::messages::success;
use chrono::{DateTime, Local};
use std::path::Path;

/// Success notice printed after a file has been written.
pub(crate) fn notify_export_success(path: &Path) {
    success(format!("CSV exportado: {}", path.display()));
}

/// `bitacora_entregas_<YYYY-MM-DD>_<HH-MM-SS>.csv` for the given local time.
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("bitacora_entregas_{}.csv", now.format("%Y-%m-%d_%H-%M-%S"))
}
