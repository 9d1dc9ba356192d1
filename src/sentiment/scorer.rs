//! Polarity estimation and labeling.

use std::sync::Arc;

use super::lexicon::Lexicon;
use crate::types::SentimentLabel;

/// Maps cleaned text to a polarity in [-1, 1].
///
/// Implementations must be deterministic for a fixed input and must not
/// mutate shared state, since one instance serves every request.
pub trait PolarityEstimator: Send + Sync {
    /// Get the name of this estimator.
    fn name(&self) -> &'static str;

    /// Estimate the polarity of `text`.
    fn polarity(&self, text: &str) -> f64;
}

/// Lexicon-based estimator.
///
/// Averages the scores of polar words. An intensifier scales the next polar
/// word; a negator flips it with a damping factor, as long as the polar word
/// follows within [`NEGATION_WINDOW`] tokens.
#[derive(Debug, Clone)]
pub struct LexiconEstimator {
    lexicon: Arc<Lexicon>,
}

/// Factor applied to a negated word score.
pub const NEGATION_FACTOR: f64 = -0.5;

/// Tokens a negator stays active for.
pub const NEGATION_WINDOW: usize = 3;

impl LexiconEstimator {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl Default for LexiconEstimator {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::english()))
    }
}

impl PolarityEstimator for LexiconEstimator {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut multiplier = 1.0;
        let mut negation_left = 0usize;

        for token in text.split_whitespace() {
            if self.lexicon.is_negator(token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }

            if let Some(m) = self.lexicon.intensifier(token) {
                multiplier *= m;
                continue;
            }

            match self.lexicon.score(token) {
                Some(base) => {
                    let mut score = base * multiplier;
                    if negation_left > 0 {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score.clamp(-1.0, 1.0));
                    multiplier = 1.0;
                    negation_left = 0;
                }
                None => {
                    multiplier = 1.0;
                    negation_left = negation_left.saturating_sub(1);
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Scores cleaned text and assigns a label.
#[derive(Clone)]
pub struct SentimentScorer {
    estimator: Arc<dyn PolarityEstimator>,
}

impl SentimentScorer {
    pub fn new(estimator: Arc<dyn PolarityEstimator>) -> Self {
        Self { estimator }
    }

    /// Polarity of `cleaned`, always finite and within [-1, 1].
    ///
    /// Blank input scores 0.0 without consulting the estimator.
    pub fn polarity(&self, cleaned: &str) -> f64 {
        if cleaned.trim().is_empty() {
            return 0.0;
        }

        let polarity = self.estimator.polarity(cleaned);
        if polarity.is_finite() {
            polarity.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Polarity and its label.
    pub fn score(&self, cleaned: &str) -> (f64, SentimentLabel) {
        let polarity = self.polarity(cleaned);
        (polarity, SentimentLabel::from_polarity(polarity))
    }

    pub fn estimator_name(&self) -> &'static str {
        self.estimator.name()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconEstimator::default()))
    }
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("estimator", &self.estimator.name())
            .finish()
    }
}
