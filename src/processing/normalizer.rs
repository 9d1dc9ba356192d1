//! Text normalization: lowercase, strip punctuation, drop stopwords.

use std::sync::Arc;

use super::stopwords::StopwordSet;

/// Maps raw text to cleaned text.
///
/// Normalization is deterministic and idempotent: normalizing cleaned text
/// returns it unchanged.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: Arc<StopwordSet>,
}

impl TextNormalizer {
    /// Create a normalizer over the given stopword set.
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// Produce the cleaned form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = strip_punctuation(&lowered);

        stripped
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(StopwordSet::english()))
    }
}

/// Remove ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
///
/// Characters are deleted, not replaced, so `don't` becomes `dont`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_cleaning() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("I love this!"), "love");
        assert_eq!(
            normalizer.normalize("The Quick, brown fox."),
            "quick brown fox"
        );
    }

    #[test]
    fn test_punctuation_and_stopwords_only() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("The, and. Of!"), "");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t "), "");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("great\n\n  product\tever"), "great product ever");
    }

    #[test]
    fn test_apostrophes_removed_before_stopword_check() {
        let normalizer = TextNormalizer::default();
        // "don't" loses its apostrophe and survives as "dont"
        assert_eq!(normalizer.normalize("Don't panic"), "dont panic");
    }

    #[test]
    fn test_unicode_punctuation_kept() {
        assert_eq!(strip_punctuation("“quoted”—yes"), "“quoted”—yes");
        assert_eq!(strip_punctuation("a.b,c!"), "abc");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = TextNormalizer::default();
        let samples = [
            "",
            "The, and. Of!",
            "I LOVE this product!!! It's the best...",
            "a.b c-d e_f",
            "  mixed\tWhitespace\nAND Stopwords of the day ",
            "Ünïcödé Wörds, ÉCOLE; façade",
            "numbers 123 and 4.56 stay",
        ];

        for sample in samples {
            let once = normalizer.normalize(sample);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_custom_stopwords() {
        let normalizer = TextNormalizer::new(Arc::new(StopwordSet::from_words(["product"])));
        assert_eq!(normalizer.normalize("The great product"), "the great");
    }
}
