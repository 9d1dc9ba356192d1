//! Uploaded file representation.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{AnalysisError, Result};

/// A file received from the upload control.
///
/// Lives only for the duration of one analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Decoded file bytes
    pub raw_bytes: Vec<u8>,

    /// Name of the file as reported by the browser
    pub filename: String,

    /// Media type declared in the data URL header (may be empty)
    pub declared_media_type: String,
}

impl UploadedFile {
    /// Create an upload from bytes already in memory.
    pub fn new(raw_bytes: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self {
            raw_bytes: raw_bytes.into(),
            filename: filename.into(),
            declared_media_type: String::new(),
        }
    }

    /// Decode a browser data URL of the form `data:<media type>;base64,<payload>`.
    pub fn from_data_url(contents: &str, filename: &str) -> Result<Self> {
        let (header, payload) = contents.split_once(',').ok_or_else(|| {
            AnalysisError::processing("upload contents are not a data URL")
        })?;

        let declared_media_type = header
            .strip_prefix("data:")
            .unwrap_or(header)
            .split(';')
            .next()
            .unwrap_or_default()
            .to_string();

        let raw_bytes = STANDARD.decode(payload.trim())?;

        Ok(Self {
            raw_bytes,
            filename: filename.to_string(),
            declared_media_type,
        })
    }

    /// Lowercased file extension, if the filename has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_url() {
        let encoded = STANDARD.encode("id,text\n1,hello\n");
        let contents = format!("data:text/csv;base64,{}", encoded);

        let file = UploadedFile::from_data_url(&contents, "reviews.csv").unwrap();

        assert_eq!(file.declared_media_type, "text/csv");
        assert_eq!(file.raw_bytes, b"id,text\n1,hello\n");
        assert_eq!(file.filename, "reviews.csv");
    }

    #[test]
    fn test_missing_comma_is_processing_error() {
        let err = UploadedFile::from_data_url("data:text/plain;base64", "a.txt").unwrap_err();
        assert!(matches!(err, AnalysisError::FileProcessing(_)));
    }

    #[test]
    fn test_invalid_base64_is_processing_error() {
        let err = UploadedFile::from_data_url("data:text/plain;base64,%%%", "a.txt").unwrap_err();
        assert!(matches!(err, AnalysisError::FileProcessing(_)));
    }

    #[test]
    fn test_extension_is_exact_and_lowercased() {
        assert_eq!(UploadedFile::new("", "Data.CSV").extension().as_deref(), Some("csv"));
        assert_eq!(UploadedFile::new("", "data.csv.bak").extension().as_deref(), Some("bak"));
        assert_eq!(UploadedFile::new("", "csvthing").extension(), None);
    }
}
