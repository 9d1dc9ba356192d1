//! Decoder for plain text files.

use super::base::{decode_utf8, Decoder};
use crate::error::Result;
use crate::types::{Table, UploadedFile};

/// Treats the whole file as a single record.
pub struct PlainTextDecoder;

impl PlainTextDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for PlainTextDecoder {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn decode(&self, file: &UploadedFile) -> Result<Table> {
        let text = decode_utf8(&file.raw_bytes)?;
        Ok(Table::single_text(text))
    }

    fn description(&self) -> &'static str {
        "Whole file as one text record"
    }
}
