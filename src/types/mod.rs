//! Core types for the analytics service.

mod config;
mod payload;
mod record;
mod upload;

pub use config::ServiceConfig;
pub use payload::{
    AnalysisResponse, AnalyzeRequest, ChartBar, ChartPayload, DisplayPayload, DisplayRow,
    ViewState,
};
pub use record::{Dataset, Record, SentimentLabel, Table};
pub use upload::UploadedFile;
