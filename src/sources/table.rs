//! Table reader for the source spreadsheets
//!
//! Reads workbooks (`.xlsx`, `.xls`, `.ods`, ...) from their first sheet, and
//! CSV/TSV exports as delimited text. The first non-blank row is the header;
//! text fields may be double-quoted with `""` as an escaped quote.

use calamine::{Reader, open_workbook_auto};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Input table not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read table: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Table has no header row")]
    NoHeader,

    #[error("Missing column(s) {missing:?}. Found: {found:?}")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },
}

const WORKBOOK_EXTENSIONS: [&str; 6] = ["xlsx", "xlsm", "xlsb", "xls", "xla", "ods"];

/// Whether the path names a spreadsheet workbook rather than delimited text
#[must_use]
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)))
}

/// Pick a delimiter from the file extension: `.csv` is comma, anything else tab
#[must_use]
pub fn delimiter_for(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => ',',
        _ => '\t',
    }
}

/// A parsed table with named columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a table from disk
    ///
    /// Workbooks are read from their first sheet and `delimiter` is ignored.
    /// Text files use `delimiter` when given, otherwise [`delimiter_for`] the path.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Missing` if the file does not exist, `Read` or
    /// `Workbook` when it cannot be read and `NoHeader` for an empty table.
    pub fn read(path: &Path, delimiter: Option<char>) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::Missing(path.to_path_buf()));
        }
        if is_workbook(path) {
            return Self::read_workbook(path);
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, delimiter.unwrap_or_else(|| delimiter_for(path)))
    }

    fn read_workbook(path: &Path) -> Result<Self, TableError> {
        let mut workbook = open_workbook_auto(path)?;
        let sheet = workbook.worksheet_range_at(0).ok_or(TableError::NoHeader)??;
        Self::from_records(
            sheet
                .rows()
                .map(|row| row.iter().map(ToString::to_string).collect()),
        )
    }

    /// Parse delimited text
    ///
    /// Rows shorter than the header are padded with empty cells. Blank lines
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns `TableError::NoHeader` when the text has no non-blank line.
    pub fn parse(text: &str, delimiter: char) -> Result<Self, TableError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self::from_records(text.lines().map(|line| split_record(line, delimiter)))
    }

    /// Build from raw records, skipping those whose cells are all blank
    fn from_records<I>(records: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut records = records
            .into_iter()
            .filter(|record| record.iter().any(|cell| !cell.trim().is_empty()));

        let headers: Vec<String> = records
            .next()
            .ok_or(TableError::NoHeader)?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();

        let rows = records
            .map(|mut fields| {
                if fields.len() < headers.len() {
                    fields.resize(headers.len(), String::new());
                }
                fields
            })
            .collect();

        Ok(Self { headers, rows })
    }

    /// Data rows, header excluded
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Positions of the named columns, in the order asked
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumns` listing every absent name.
    pub fn require_columns(&self, names: &[&str]) -> Result<Vec<usize>, TableError> {
        let mut positions = Vec::with_capacity(names.len());
        let mut missing = Vec::new();

        for &name in names {
            match self.headers.iter().position(|h| h == name) {
                Some(pos) => positions.push(pos),
                None => missing.push(name.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(positions)
        } else {
            Err(TableError::MissingColumns {
                missing,
                found: self.headers.clone(),
            })
        }
    }
}

/// Split one line into fields, honouring double quotes
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv_with_header() {
        let table = Table::parse("Word,Lg10WF\nthe,6.18\nhouse,4.2\n", ',').unwrap();
        assert_eq!(table.headers, ["Word", "Lg10WF"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1], ["house", "4.2"]);
    }

    #[test]
    fn parse_tsv_skips_blank_lines() {
        let table = Table::parse("\nWord\tNletters\n\ncat\t3\n\n", '\t').unwrap();
        assert_eq!(table.headers, ["Word", "Nletters"]);
        assert_eq!(table.rows(), [vec!["cat".to_string(), "3".to_string()]]);
    }

    #[test]
    fn parse_pads_short_rows() {
        let table = Table::parse("a,b,c\n1\n", ',').unwrap();
        assert_eq!(table.rows()[0], ["1", "", ""]);
    }

    #[test]
    fn parse_handles_quotes() {
        let table = Table::parse("Word,Note\n\"rock, paper\",\"say \"\"hi\"\"\"\n", ',').unwrap();
        assert_eq!(table.rows()[0], ["rock, paper", "say \"hi\""]);
    }

    #[test]
    fn parse_strips_byte_order_mark() {
        let table = Table::parse("\u{feff}Word,Lg10WF\n", ',').unwrap();
        assert_eq!(table.headers[0], "Word");
    }

    #[test]
    fn parse_empty_text_has_no_header() {
        assert!(matches!(Table::parse("\n\n", ','), Err(TableError::NoHeader)));
    }

    #[test]
    fn require_columns_reports_all_missing() {
        let table = Table::parse("Word,Freq\n", ',').unwrap();
        assert_eq!(table.require_columns(&["Freq", "Word"]).unwrap(), [1, 0]);

        match table.require_columns(&["Word", "AoA", "Nletters"]) {
            Err(TableError::MissingColumns { missing, found }) => {
                assert_eq!(missing, ["AoA", "Nletters"]);
                assert_eq!(found, ["Word", "Freq"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn delimiter_from_extension() {
        assert_eq!(delimiter_for(Path::new("data/aoa.csv")), ',');
        assert_eq!(delimiter_for(Path::new("data/AOA.CSV")), ',');
        assert_eq!(delimiter_for(Path::new("data/subtlex.tsv")), '\t');
        assert_eq!(delimiter_for(Path::new("data/subtlex.txt")), '\t');
    }

    #[test]
    fn workbook_detected_from_extension() {
        assert!(is_workbook(Path::new("data/subtlex-us.xlsx")));
        assert!(is_workbook(Path::new("data/AOA.XLS")));
        assert!(is_workbook(Path::new("data/aoa.ods")));
        assert!(!is_workbook(Path::new("data/aoa.csv")));
        assert!(!is_workbook(Path::new("data/aoa")));
    }

    #[test]
    fn read_workbook_first_sheet() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/aoa.xlsx");
        let table = Table::read(&path, Some(',')).unwrap();

        assert_eq!(table.headers, ["Word", "AoA_Kup_lem", "Nletters"]);
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.rows()[0], ["apple", "3.2", "5"]);
        assert_eq!(table.rows()[2], ["bank", "15", "4"]);
    }

    #[test]
    fn read_corrupt_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, "Word,Lg10WF\nthe,6.18\n").unwrap();

        let result = Table::read(&path, None);
        assert!(matches!(result, Err(TableError::Workbook(_))));
    }

    #[test]
    fn read_missing_file() {
        let result = Table::read(Path::new("no/such/table.csv"), None);
        assert!(matches!(result, Err(TableError::Missing(_))));
    }
}
