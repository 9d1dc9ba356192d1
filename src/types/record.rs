//! Tabular input and scored record types.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::TEXT_COLUMN;

/// Sentiment category assigned from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Bucket a polarity: strictly positive, strictly negative, or zero.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded upload before analysis.
///
/// Column order and row order follow the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Header names
    pub columns: Vec<String>,

    /// Data rows, each with one cell per column
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// A one-row table holding `text` in the text column.
    pub fn single_text(text: impl Into<String>) -> Self {
        Self {
            columns: vec![TEXT_COLUMN.to_string()],
            rows: vec![vec![text.into()]],
        }
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of a column in row order.
    ///
    /// Fails with [`AnalysisError::MissingRequiredColumn`] if the column is absent.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| AnalysisError::MissingRequiredColumn(name.to_string()))?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or_default())
            .collect())
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A fully analysed record.
///
/// The derived fields are only ever set together, through [`Record::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    text: String,
    cleaned_text: String,
    sentiment: f64,
    sentiment_label: SentimentLabel,
}

impl Record {
    /// Build a record from its source text, cleaned text and polarity.
    pub fn new(text: impl Into<String>, cleaned_text: impl Into<String>, sentiment: f64) -> Self {
        Self {
            text: text.into(),
            cleaned_text: cleaned_text.into(),
            sentiment,
            sentiment_label: SentimentLabel::from_polarity(sentiment),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    pub fn sentiment(&self) -> f64 {
        self.sentiment
    }

    pub fn sentiment_label(&self) -> SentimentLabel {
        self.sentiment_label
    }
}

/// Scored records in source row order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records per label, in order of first appearance.
    pub fn label_counts(&self) -> Vec<(SentimentLabel, usize)> {
        let mut counts: Vec<(SentimentLabel, usize)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(l, _)| *l == record.sentiment_label) {
                Some((_, n)) => *n += 1,
                None => counts.push((record.sentiment_label, 1)),
            }
        }
        counts
    }
}
