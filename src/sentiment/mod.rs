//! Sentiment scoring.
//!
//! Polarity estimation sits behind the [`PolarityEstimator`] trait so the
//! lexicon-based default can be swapped for any deterministic estimator.

pub mod lexicon;
pub mod scorer;

pub use lexicon::{Lexicon, LexiconStats};
pub use scorer::{LexiconEstimator, PolarityEstimator, SentimentScorer};
