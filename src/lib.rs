//! Sentiment Analytics Library
//!
//! Scores the sentiment of uploaded text and CSV files. An upload is decoded
//! into a table, each record's text is cleaned and scored, and the results
//! are returned as a table plus a histogram of sentiment labels.

pub mod api;
pub mod decoders;
pub mod error;
pub mod pipeline;
pub mod presenter;
pub mod processing;
pub mod router;
pub mod sentiment;
pub mod types;

pub use decoders::{Decoder, PlainTextDecoder, TableDecoder};
pub use error::{AnalysisError, NO_FILE_MESSAGE};
pub use pipeline::SentimentPipeline;
pub use processing::{StopwordSet, TextNormalizer};
pub use router::DecoderRouter;
pub use sentiment::{Lexicon, LexiconEstimator, PolarityEstimator, SentimentScorer};
pub use types::{
    AnalysisResponse, AnalyzeRequest, ChartPayload, Dataset, DisplayPayload, Record,
    SentimentLabel, ServiceConfig, Table, UploadedFile, ViewState,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{AnalysisError, NO_FILE_MESSAGE};
    pub use crate::pipeline::SentimentPipeline;
    pub use crate::processing::*;
    pub use crate::sentiment::*;
    pub use crate::types::*;
}

/// Column holding the text to analyse
pub const TEXT_COLUMN: &str = "text";

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: [u8; 4] = [0, 0, 0, 0];

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;
