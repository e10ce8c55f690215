//! Header row → column index mapping.
//!
//! Header names are compared after trimming, lowercasing, stripping
//! diacritics and collapsing internal whitespace, so `" titulo "`,
//! `"TÍTULO"` and `"Título"` all resolve to the same column.

use crate::errors::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical header, in export order.
pub const CANONICAL_HEADERS: [&str; 7] = [
    "ID",
    "Fecha",
    "Tipo",
    "Ruta",
    "Título",
    "Descripción",
    "Creado",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Date,
    Type,
    Route,
    Title,
    Description,
    CreatedAt,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Date,
        Column::Type,
        Column::Route,
        Column::Title,
        Column::Description,
        Column::CreatedAt,
    ];

    pub fn canonical_name(self) -> &'static str {
        CANONICAL_HEADERS[self as usize]
    }

    /// `Ruta` and `Creado` may be absent without aborting the import.
    pub fn is_required(self) -> bool {
        !matches!(self, Column::Route | Column::CreatedAt)
    }
}

/// Canonical column → index in the parsed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; 7],
    width: usize,
}

impl ColumnMap {
    /// Build the mapping from a tokenized header row. Fails with the list
    /// of missing required columns.
    pub fn from_header(header: &[String]) -> AppResult<Self> {
        let normalized: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();

        let mut indices = [None; 7];
        let mut missing = Vec::new();
        for col in Column::ALL {
            let wanted = normalize_header(col.canonical_name());
            let found = normalized.iter().position(|h| *h == wanted);
            indices[col as usize] = found;
            if found.is_none() && col.is_required() {
                missing.push(col.canonical_name());
            }
        }

        if !missing.is_empty() {
            return Err(AppError::MissingColumns(missing));
        }

        Ok(Self {
            indices,
            width: header.len(),
        })
    }

    pub fn index_of(&self, col: Column) -> Option<usize> {
        self.indices[col as usize]
    }

    /// Number of fields in the header row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raw value of `col` in `fields`; `None` when the column is unmapped or
    /// the row is too short.
    pub fn value<'a>(&self, fields: &'a [String], col: Column) -> Option<&'a str> {
        self.index_of(col)
            .and_then(|i| fields.get(i))
            .map(String::as_str)
    }
}

/// Comparison form of a header cell.
pub fn normalize_header(raw: &str) -> String {
    let stripped: String = raw
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
