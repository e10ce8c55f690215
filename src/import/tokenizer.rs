//! CSV line tokenizer.
//!
//! Quoting follows RFC 4180: commas and newlines inside double quotes are
//! literal, `""` is one quote. Fields are never trimmed. Line endings are
//! normalized to `\n` first, a leading BOM is dropped and blank rows are
//! skipped. Unterminated quotes at end of input close implicitly.

use csv::{ReaderBuilder, StringRecord};

const BOM: char = '\u{feff}';

/// One tokenized row. `number` is 1-based and counts only kept rows, so the
/// header is row 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub number: usize,
    pub fields: Vec<String>,
}

/// `\r\n` and bare `\r` become `\n`, a leading BOM is removed.
pub fn normalize(text: &str) -> String {
    text.trim_start_matches(BOM)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Split `text` into rows of raw field values.
pub fn tokenize(text: &str) -> Vec<Row> {
    let normalized = normalize(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(normalized.as_bytes());

    // Input is valid UTF-8 and rows may differ in length, so the reader has
    // no error to report here.
    reader
        .records()
        .flatten()
        .filter(|rec| !is_blank(rec))
        .enumerate()
        .map(|(i, rec)| Row {
            number: i + 1,
            fields: rec.iter().map(str::to_string).collect(),
        })
        .collect()
}

fn is_blank(rec: &StringRecord) -> bool {
    rec.iter().all(|f| f.trim().is_empty()) && rec.len() <= 1
}
