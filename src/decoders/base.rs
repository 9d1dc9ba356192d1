//! Base trait for all decoders.

use crate::error::Result;
use crate::types::{Table, UploadedFile};

/// The core trait that all decoders must implement.
///
/// A decoder reads the raw bytes of an upload and produces the table the
/// analysis pipeline consumes.
pub trait Decoder: Send + Sync {
    /// Get the name of this decoder.
    fn name(&self) -> &'static str;

    /// Lowercase file extensions (without the dot) this decoder handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Decode the uploaded file.
    ///
    /// Encoding and parse failures are reported as
    /// [`AnalysisError::FileProcessing`](crate::error::AnalysisError::FileProcessing).
    fn decode(&self, file: &UploadedFile) -> Result<Table>;

    /// Get the description of this decoder.
    fn description(&self) -> &'static str {
        "A file decoder"
    }
}

/// Decode bytes as UTF-8, dropping a leading byte order mark.
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let text = String::from_utf8(bytes.to_vec())?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
