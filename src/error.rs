//! Error taxonomy for the analysis pipeline.

use thiserror::Error;

/// Placeholder shown when Analyze is triggered without an upload.
pub const NO_FILE_MESSAGE: &str = "No file uploaded yet.";

/// Failures that can end an analysis run.
///
/// None of these escape the pipeline entry point: each one is rendered as a
/// user-visible message in place of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Analyze was triggered before any file was supplied.
    #[error("No file uploaded yet.")]
    NoFileUploaded,

    /// The filename does not carry a supported extension.
    #[error("Unsupported file type.")]
    UnsupportedFileType,

    /// The payload could not be decoded or parsed.
    #[error("Error processing file: {0}")]
    FileProcessing(String),

    /// The decoded table lacks a column the pipeline needs.
    #[error("Error processing file: missing required column '{0}'")]
    MissingRequiredColumn(String),
}

impl AnalysisError {
    /// Wrap any displayable cause as a processing failure.
    pub fn processing(cause: impl std::fmt::Display) -> Self {
        Self::FileProcessing(cause.to_string())
    }

    /// The text rendered to the user for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether this outcome is the idle placeholder rather than a failure.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::NoFileUploaded)
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        Self::processing(err)
    }
}

impl From<std::string::FromUtf8Error> for AnalysisError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::processing(err)
    }
}

impl From<base64::DecodeError> for AnalysisError {
    fn from(err: base64::DecodeError) -> Self {
        Self::processing(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
