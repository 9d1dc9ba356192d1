//! Word polarity lexicon.

use std::collections::HashMap;

/// Polar words with scores in [-1, 1].
const POLAR_WORDS: &[(&str, f64)] = &[
    // Strongly positive
    ("love", 0.5),
    ("loved", 0.7),
    ("loves", 0.5),
    ("lovely", 0.5),
    ("best", 1.0),
    ("perfect", 1.0),
    ("excellent", 1.0),
    ("outstanding", 0.5),
    ("wonderful", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("brilliant", 0.9),
    ("superb", 1.0),
    ("delightful", 1.0),
    ("magnificent", 1.0),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("beautiful", 0.85),
    ("exceptional", 0.67),
    // Moderately positive
    ("good", 0.7),
    ("great", 0.8),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.5),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("like", 0.2),
    ("liked", 0.6),
    ("fun", 0.3),
    ("fine", 0.42),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("easy", 0.43),
    ("fast", 0.2),
    ("friendly", 0.38),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("satisfied", 0.5),
    ("pleasant", 0.73),
    ("positive", 0.23),
    ("clean", 0.37),
    ("fresh", 0.3),
    ("better", 0.5),
    ("cool", 0.35),
    ("worth", 0.3),
    ("reliable", 0.4),
    ("smooth", 0.4),
    ("comfortable", 0.4),
    ("interesting", 0.5),
    ("exciting", 0.3),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("win", 0.8),
    ("success", 0.3),
    ("successful", 0.75),
    ("correct", 0.3),
    ("strong", 0.43),
    ("favorite", 0.5),
    // Moderately negative
    ("bad", -0.7),
    ("poor", -0.4),
    ("sad", -0.5),
    ("slow", -0.3),
    ("boring", -1.0),
    ("broken", -0.4),
    ("wrong", -0.5),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("problem", -0.2),
    ("problems", -0.2),
    ("issue", -0.1),
    ("annoying", -0.8),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("expensive", -0.5),
    ("cheap", -0.1),
    ("dirty", -0.6),
    ("rude", -0.3),
    ("negative", -0.3),
    ("worse", -0.4),
    ("weak", -0.38),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("useless", -0.5),
    ("confusing", -0.3),
    ("mediocre", -0.3),
    ("lost", -0.2),
    ("missing", -0.2),
    ("sorry", -0.5),
    ("unfortunately", -0.5),
    ("dislike", -0.4),
    ("waste", -0.2),
    ("complaint", -0.3),
    ("refund", -0.1),
    // Strongly negative
    ("hate", -0.8),
    ("hated", -0.9),
    ("hates", -0.8),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("disgusting", -1.0),
    ("pathetic", -1.0),
    ("dreadful", -0.9),
    ("miserable", -1.0),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("ridiculous", -0.33),
    ("nasty", -1.0),
    ("furious", -0.9),
    ("scam", -0.8),
    ("fraud", -0.8),
    ("garbage", -0.8),
    ("junk", -0.6),
];

/// Words that scale the next polar word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("completely", 1.3),
    ("highly", 1.3),
    ("super", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.5),
];

/// Words that invert the next polar word.
///
/// Spelled without apostrophes since punctuation is stripped before scoring.
/// Only words that survive stopword removal belong here; `not` and `no` are
/// stopwords and never reach the scorer.
const NEGATORS: &[&str] = &[
    "never", "nothing", "none", "neither", "nobody", "nowhere", "cannot", "cant",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont",
    "wouldnt", "shouldnt", "couldnt", "hasnt", "havent", "hadnt",
];

/// Immutable polarity lexicon.
///
/// Loaded once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Lexicon {
    scores: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negators: Vec<String>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self {
            scores: POLAR_WORDS
                .iter()
                .map(|(w, s)| (w.to_string(), *s))
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            negators: NEGATORS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Polarity of a single lowercased word.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Multiplier for an intensifying word.
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.iter().any(|n| n == word)
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            positive_count: self.scores.values().filter(|s| **s > 0.0).count(),
            negative_count: self.scores.values().filter(|s| **s < 0.0).count(),
            intensifier_count: self.intensifiers.len(),
            negator_count: self.negators.len(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

/// Lexicon size summary, logged at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconStats {
    pub positive_count: usize,
    pub negative_count: usize,
    pub intensifier_count: usize,
    pub negator_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::StopwordSet;

    #[test]
    fn test_scores_in_range() {
        for (word, score) in POLAR_WORDS {
            assert!(
                (-1.0..=1.0).contains(score) && *score != 0.0,
                "bad score for {}",
                word
            );
        }
    }

    #[test]
    fn test_love_and_hate() {
        let lexicon = Lexicon::english();
        assert!(lexicon.score("love").unwrap() > 0.0);
        assert!(lexicon.score("hate").unwrap() < 0.0);
        assert_eq!(lexicon.score("table"), None);
    }

    #[test]
    fn test_negators_and_intensifiers() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_negator("never"));
        assert!(lexicon.is_negator("dont"));
        assert!(!lexicon.is_negator("good"));
        assert!(lexicon.intensifier("extremely").unwrap() > 1.0);
        assert!(lexicon.intensifier("slightly").unwrap() < 1.0);
    }

    #[test]
    fn test_negators_survive_stopword_removal() {
        let stopwords = StopwordSet::english();
        for negator in NEGATORS {
            assert!(!stopwords.contains(negator), "{} is a stopword", negator);
        }
    }

    #[test]
    fn test_stats() {
        let stats = Lexicon::english().stats();
        assert!(stats.positive_count > 0);
        assert!(stats.negative_count > 0);
        assert_eq!(stats.intensifier_count, INTENSIFIERS.len());
    }
}
