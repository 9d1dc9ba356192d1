//! Decoder router.

use std::sync::Arc;

use crate::decoders::{Decoder, PlainTextDecoder, TableDecoder};
use crate::error::{AnalysisError, Result};
use crate::types::{Table, UploadedFile};

/// Router that selects the decoder for an upload.
///
/// Selection is by exact, case-insensitive file extension; substrings
/// elsewhere in the name (`data.csv.bak`, `csvnotes.txt`) do not count.
pub struct DecoderRouter {
    /// Comma-delimited tables
    csv_decoder: Arc<TableDecoder>,
    /// Tab-delimited tables
    tsv_decoder: Arc<TableDecoder>,
    /// Plain text, one record per file
    text_decoder: Arc<PlainTextDecoder>,
}

impl DecoderRouter {
    pub fn new() -> Self {
        Self {
            csv_decoder: Arc::new(TableDecoder::csv()),
            tsv_decoder: Arc::new(TableDecoder::tsv()),
            text_decoder: Arc::new(PlainTextDecoder::new()),
        }
    }

    /// Get the decoder for the given upload, if its type is supported.
    pub fn get_decoder(&self, file: &UploadedFile) -> Option<Arc<dyn Decoder>> {
        let extension = file.extension()?;
        self.decoders()
            .into_iter()
            .find(|d| d.extensions().contains(&extension.as_str()))
    }

    /// Decode an upload with the matching decoder.
    pub fn decode(&self, file: &UploadedFile) -> Result<Table> {
        let decoder = self
            .get_decoder(file)
            .ok_or(AnalysisError::UnsupportedFileType)?;
        decoder.decode(file)
    }

    /// List all available decoders.
    pub fn list_decoders(&self) -> Vec<(&'static str, &'static str)> {
        self.decoders()
            .iter()
            .map(|d| (d.name(), d.description()))
            .collect()
    }

    fn decoders(&self) -> Vec<Arc<dyn Decoder>> {
        vec![
            Arc::clone(&self.csv_decoder) as Arc<dyn Decoder>,
            Arc::clone(&self.tsv_decoder) as Arc<dyn Decoder>,
            Arc::clone(&self.text_decoder) as Arc<dyn Decoder>,
        ]
    }
}

impl Default for DecoderRouter {
    fn default() -> Self {
        Self::new()
    }
}
