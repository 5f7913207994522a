//! Spreadsheet import
//!
//! Word lists come in as CSV or Excel files with a header row. Column
//! matching accepts the Japanese and English header names in common use:
//! `No`/`番号`, `単語`/`Word`, `意味`/`Meaning`. The number column is
//! optional; rows without a usable number get their 1-based row index.
//! Rows missing a word or meaning are dropped.

use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use crate::words::WordEntry;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Word and meaning columns not found; check the header row")]
    MissingColumns,

    #[error("No usable rows found in the file")]
    NoData,
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Import a word list, dispatching on the file extension
pub fn import_file(path: &Path) -> Result<Vec<WordEntry>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => import_csv(&fs::read_to_string(path)?),
        "xlsx" | "xls" | "ods" => import_workbook(path),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

/// Resolved header positions for a sheet
struct Columns {
    no: Option<usize>,
    word: usize,
    meaning: usize,
}

fn resolve_columns(headers: &[String]) -> Result<Columns> {
    let find = |names: &[&str]| {
        headers.iter().position(|h| {
            let h = h.trim();
            names.iter().any(|n| h.eq_ignore_ascii_case(n))
        })
    };

    let no = find(&["No", "番号"]);
    let word = find(&["単語", "Word"]);
    let meaning = find(&["意味", "Meaning"]);

    match (word, meaning) {
        (Some(word), Some(meaning)) => Ok(Columns { no, word, meaning }),
        _ => Err(ImportError::MissingColumns),
    }
}

/// Parse CSV content into word entries
pub fn import_csv(content: &str) -> Result<Vec<WordEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = resolve_columns(&headers)?;

    let mut entries = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable row {}: {}", row_idx + 1, e);
                continue;
            }
        };

        let no = columns
            .no
            .and_then(|c| record.get(c))
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(row_idx as u32 + 1);
        let word = record.get(columns.word).unwrap_or("").trim();
        let meaning = record.get(columns.meaning).unwrap_or("").trim();

        if word.is_empty() || meaning.is_empty() {
            continue;
        }
        entries.push(WordEntry::new(no, word, meaning));
    }

    if entries.is_empty() {
        return Err(ImportError::NoData);
    }
    Ok(entries)
}

/// Parse the first sheet of an Excel or OpenDocument workbook
fn import_workbook(path: &Path) -> Result<Vec<WordEntry>> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoData)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(ImportError::NoData)?
        .iter()
        .map(cell_text)
        .collect();
    let columns = resolve_columns(&headers)?;

    let mut entries = Vec::new();
    for (row_idx, row) in rows.enumerate() {
        let no = columns
            .no
            .and_then(|c| row.get(c))
            .and_then(cell_number)
            .unwrap_or(row_idx as u32 + 1);
        let word = row.get(columns.word).map(cell_text).unwrap_or_default();
        let meaning = row.get(columns.meaning).map(cell_text).unwrap_or_default();

        if word.is_empty() || meaning.is_empty() {
            continue;
        }
        entries.push(WordEntry::new(no, word, meaning));
    }

    if entries.is_empty() {
        return Err(ImportError::NoData);
    }
    Ok(entries)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_number(cell: &Data) -> Option<u32> {
    match cell {
        Data::Int(i) if *i >= 0 => Some(*i as u32),
        Data::Float(f) if *f >= 0.0 => Some(*f as u32),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_with_japanese_headers() {
        let content = "No,単語,意味\n1,persist,持続する\n2,obtain,得る\n";
        let entries = import_csv(content).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], WordEntry::new(1, "persist", "持続する"));
        assert_eq!(entries[1].no, 2);
    }

    #[test]
    fn test_csv_with_english_headers_any_case() {
        let content = "no,word,meaning\n10,cat,猫\n";
        let entries = import_csv(content).unwrap();

        assert_eq!(entries, vec![WordEntry::new(10, "cat", "猫")]);
    }

    #[test]
    fn test_missing_number_column_falls_back_to_row_index() {
        let content = "Word,Meaning\ncat,猫\ndog,犬\n";
        let entries = import_csv(content).unwrap();

        assert_eq!(entries[0].no, 1);
        assert_eq!(entries[1].no, 2);
    }

    #[test]
    fn test_unparsable_number_falls_back_to_row_index() {
        let content = "No,Word,Meaning\nx,cat,猫\n5,dog,犬\n";
        let entries = import_csv(content).unwrap();

        assert_eq!(entries[0].no, 1);
        assert_eq!(entries[1].no, 5);
    }

    #[test]
    fn test_rows_without_word_or_meaning_are_dropped() {
        let content = "No,Word,Meaning\n1,cat,猫\n2,,犬\n3,bird,\n4,fish,魚\n";
        let entries = import_csv(content).unwrap();

        let nos: Vec<u32> = entries.iter().map(|e| e.no).collect();
        assert_eq!(nos, vec![1, 4]);
    }

    #[test]
    fn test_missing_columns_is_an_error() {
        let content = "a,b,c\n1,2,3\n";
        assert!(matches!(import_csv(content), Err(ImportError::MissingColumns)));
    }

    #[test]
    fn test_header_only_file_is_an_error() {
        let content = "No,Word,Meaning\n";
        assert!(matches!(import_csv(content), Err(ImportError::NoData)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = import_file(Path::new("words.pdf")).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_cell_number_conversions() {
        assert_eq!(cell_number(&Data::Int(3)), Some(3));
        assert_eq!(cell_number(&Data::Float(7.0)), Some(7));
        assert_eq!(cell_number(&Data::String(" 12 ".to_string())), Some(12));
        assert_eq!(cell_number(&Data::Empty), None);
        assert_eq!(cell_number(&Data::Int(-1)), None);
    }
}
