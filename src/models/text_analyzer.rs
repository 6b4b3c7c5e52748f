use crate::models::{Dictionary, Error, ThemeClassification, ThemeClassifier};
use crate::types::{FrequencyMap, RankedEntry, ThemeScoreMap};
use crate::utils::{count_word_frequencies, tokenize, top_n_words};
use log::debug;

/// An analysis session bound to one dictionary.
///
/// The dictionary is never modified, so one analyzer can be reused for any number of
/// documents. Every call performs its own pass over the text and keeps no state between
/// calls.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    dictionary: Dictionary,
}

impl TextAnalyzer {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Determines the theme of `text`.
    pub fn classify_text(&self, text: &str) -> ThemeClassification {
        let classification = ThemeClassifier::new(&self.dictionary).classify(tokenize(text));

        debug!("Classified text as: {}", classification);

        classification
    }

    /// Per-theme keyword match counts for `text`, in dictionary order.
    pub fn score_themes(&self, text: &str) -> ThemeScoreMap {
        ThemeClassifier::new(&self.dictionary).score_tokens(tokenize(text))
    }

    pub fn word_frequencies(&self, text: &str) -> FrequencyMap {
        let frequencies = count_word_frequencies(tokenize(text));

        debug!(
            "Counted {} distinct words ({} total)",
            frequencies.len(),
            frequencies.values().sum::<usize>()
        );

        frequencies
    }

    /// The `n` most frequent words of `text`.
    pub fn top_words(&self, text: &str, n: usize) -> Result<Vec<RankedEntry>, Error> {
        top_n_words(&self.word_frequencies(text), n)
    }
}
