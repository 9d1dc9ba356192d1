//! Decoder for header-bearing delimited tables.

use csv::ReaderBuilder;

use super::base::{decode_utf8, Decoder};
use crate::error::{AnalysisError, Result};
use crate::types::{Table, UploadedFile};

/// Decoder for CSV-style tables.
///
/// The first record is the header; every column is preserved. Rows must
/// have as many fields as the header.
pub struct TableDecoder {
    name: &'static str,
    delimiter: u8,
    extensions: &'static [&'static str],
}

impl TableDecoder {
    /// Comma-separated values.
    pub fn csv() -> Self {
        Self {
            name: "csv",
            delimiter: b',',
            extensions: &["csv"],
        }
    }

    /// Tab-separated values.
    pub fn tsv() -> Self {
        Self {
            name: "tsv",
            delimiter: b'\t',
            extensions: &["tsv"],
        }
    }

    /// Parse delimited text into a table.
    pub fn parse(&self, text: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if columns.is_empty() {
            return Err(AnalysisError::processing("No columns to parse from file"));
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Table::new(columns, rows))
    }
}

impl Decoder for TableDecoder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn decode(&self, file: &UploadedFile) -> Result<Table> {
        let text = decode_utf8(&file.raw_bytes)?;
        self.parse(&text)
    }

    fn description(&self) -> &'static str {
        "Header-bearing delimited table, one record per row"
    }
}
