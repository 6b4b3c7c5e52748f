#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_REPORT_BUILDER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    Dictionary, Error, ReportBuilder, ReportBuilderConfig, TextAnalyzer, ThemeClassification,
    ThemeClassifier,
};
pub mod types;
mod utils;
pub use types::{
    FrequencyMap, Keyword, RankedEntry, ThemeName, ThemeScore, ThemeScoreMap, Token, TokenRef,
    Word, WordFrequency,
};
pub use utils::{
    count_word_frequencies, read_dictionary_from_path, read_dictionary_from_string,
    read_text_document, resolve_report_path, sanitize_token, sort_results, tokenize, top_n,
    top_n_themes, top_n_words, write_csv_report, write_report,
};

/// Determines which theme of `dictionary` best describes `text`.
pub fn classify_text(text: &str, dictionary: &Dictionary) -> ThemeClassification {
    ThemeClassifier::new(dictionary).classify(tokenize(text))
}

/// Builds the word frequency map of `text`.
pub fn count_words_in_text(text: &str) -> FrequencyMap {
    count_word_frequencies(tokenize(text))
}

/// Returns the `n` most frequent words of `text`, most frequent first.
pub fn extract_top_words_from_text(text: &str, n: usize) -> Result<Vec<RankedEntry>, Error> {
    top_n_words(&count_words_in_text(text), n)
}
