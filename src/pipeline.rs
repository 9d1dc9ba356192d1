//! The analysis pipeline: decode, normalize, score, present.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{AnalysisError, Result};
use crate::presenter;
use crate::processing::{StopwordSet, TextNormalizer};
use crate::router::DecoderRouter;
use crate::sentiment::{Lexicon, LexiconEstimator, SentimentScorer};
use crate::types::{
    AnalysisResponse, AnalyzeRequest, ChartPayload, Dataset, DisplayPayload, Record,
    SentimentLabel, Table, UploadedFile, ViewState,
};
use crate::TEXT_COLUMN;

/// Runs one upload through every stage.
///
/// Holds only immutable state (decoders, stopwords, estimator), so a single
/// instance serves all requests; each run builds its own table and dataset.
pub struct SentimentPipeline {
    router: DecoderRouter,
    normalizer: TextNormalizer,
    scorer: SentimentScorer,
}

impl SentimentPipeline {
    /// Create a pipeline from explicit components.
    pub fn new(router: DecoderRouter, normalizer: TextNormalizer, scorer: SentimentScorer) -> Self {
        Self {
            router,
            normalizer,
            scorer,
        }
    }

    /// Build the pipeline over the English stopwords and lexicon.
    ///
    /// Called once at startup; the resources are immutable afterwards.
    pub fn english() -> Self {
        let stopwords = Arc::new(StopwordSet::english());
        let lexicon = Arc::new(Lexicon::english());
        let stats = lexicon.stats();

        let pipeline = Self::new(
            DecoderRouter::new(),
            TextNormalizer::new(Arc::clone(&stopwords)),
            SentimentScorer::new(Arc::new(LexiconEstimator::new(lexicon))),
        );

        info!(
            stopwords = stopwords.len(),
            positive_words = stats.positive_count,
            negative_words = stats.negative_count,
            estimator = pipeline.scorer.estimator_name(),
            "Loaded analysis resources"
        );

        pipeline
    }

    /// Handle an Analyze action, rendering every failure as a message.
    pub fn analyze(&self, request: &AnalyzeRequest) -> AnalysisResponse {
        let filename = request.filename.as_deref().unwrap_or_default();
        let started = Instant::now();

        let outcome = self
            .upload_from_request(request)
            .and_then(|file| self.run(&file));

        match outcome {
            Ok((payload, chart)) => {
                let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                info!(
                    filename,
                    records = payload.record_count,
                    positive = chart.count(SentimentLabel::Positive),
                    negative = chart.count(SentimentLabel::Negative),
                    neutral = chart.count(SentimentLabel::Neutral),
                    elapsed_ms,
                    "Analysis complete"
                );
                AnalysisResponse::displayed(payload, chart)
            }
            Err(err) if err.is_idle() => {
                debug!("Analyze triggered without an upload");
                AnalysisResponse::message(ViewState::Idle, err.user_message())
            }
            Err(err) => {
                let message = err.user_message();
                warn!(filename, error = %message, "Analysis failed");
                AnalysisResponse::message(ViewState::Displayed, message)
            }
        }
    }

    /// Decode, score and present a single upload.
    pub fn run(&self, file: &UploadedFile) -> Result<(DisplayPayload, ChartPayload)> {
        let table = self.router.decode(file)?;
        let dataset = self.score_table(&table)?;
        Ok(presenter::present(&file.filename, &dataset))
    }

    /// Score every row of the table's text column.
    pub fn score_table(&self, table: &Table) -> Result<Dataset> {
        let texts = table.column(TEXT_COLUMN)?;

        let records = texts
            .into_iter()
            .map(|text| self.score_text(text))
            .collect();

        Ok(Dataset::new(records))
    }

    /// Clean and score one piece of text.
    pub fn score_text(&self, text: &str) -> Record {
        let cleaned = self.normalizer.normalize(text);
        let polarity = self.scorer.polarity(&cleaned);
        Record::new(text, cleaned, polarity)
    }

    pub fn router(&self) -> &DecoderRouter {
        &self.router
    }

    fn upload_from_request(&self, request: &AnalyzeRequest) -> Result<UploadedFile> {
        let contents = request
            .contents
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(AnalysisError::NoFileUploaded)?;
        let filename = request.filename.as_deref().unwrap_or_default();

        UploadedFile::from_data_url(contents, filename)
    }
}

impl Default for SentimentPipeline {
    fn default() -> Self {
        Self::english()
    }
}
