//! Text preprocessing.
//!
//! This module provides:
//! - The English stopword set, built once at startup
//! - The text normalizer that produces cleaned text for scoring

pub mod normalizer;
pub mod stopwords;

pub use normalizer::{strip_punctuation, TextNormalizer};
pub use stopwords::StopwordSet;
