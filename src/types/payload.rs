//! Request and response payloads for the analyze endpoint.

use serde::{Deserialize, Serialize};

use super::SentimentLabel;

/// Body of an Analyze action.
///
/// Both fields are absent until the user has picked a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Upload contents as a `data:` URL
    #[serde(default)]
    pub contents: Option<String>,

    /// Original filename
    #[serde(default)]
    pub filename: Option<String>,
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub text: String,
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
}

/// The results table shown after a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPayload {
    /// Filename of the analysed upload
    pub title: String,

    /// Total records analysed
    pub record_count: usize,

    /// Every record, in source order
    pub rows: Vec<DisplayRow>,
}

/// One bar of the sentiment histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: SentimentLabel,
    pub count: usize,
}

/// Histogram of records per sentiment label.
///
/// The empty chart has no title, axis, or bars.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,

    #[serde(default)]
    pub bars: Vec<ChartBar>,
}

impl ChartPayload {
    /// A chart with nothing to draw.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.bars.is_empty()
    }

    /// Sum of all bar counts.
    pub fn total(&self) -> usize {
        self.bars.iter().map(|b| b.count).sum()
    }

    /// Count for a single label (zero if the label has no bar).
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.bars
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.count)
            .unwrap_or(0)
    }
}

/// What the page is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Nothing analysed yet
    Idle,
    /// Output of the last Analyze action (results or an error message)
    Displayed,
}

/// Response of the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub state: ViewState,

    /// Placeholder or error text shown in place of the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayPayload>,

    pub chart: ChartPayload,
}

impl AnalysisResponse {
    /// A successful analysis.
    pub fn displayed(display: DisplayPayload, chart: ChartPayload) -> Self {
        Self {
            state: ViewState::Displayed,
            message: None,
            display: Some(display),
            chart,
        }
    }

    /// A message in place of the results, with an empty chart.
    pub fn message(state: ViewState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: Some(message.into()),
            display: None,
            chart: ChartPayload::empty(),
        }
    }

    /// Number of analysed records, if the analysis succeeded.
    pub fn record_count(&self) -> Option<usize> {
        self.display.as_ref().map(|d| d.record_count)
    }
}
