pub mod constants;

use constants::{
    COMMENT_DIRECTIVE, EXPECTED_THEME_DIRECTIVE, EXPECTED_TOP_DIRECTIVE, TEST_DICTIONARY_PATH,
};
use std::fs;
use std::path::Path;
use theme_sniffer::{read_dictionary_from_path, Dictionary, RankedEntry, TextAnalyzer};

/// Loads the shared dictionary used by the fixture files.
pub fn load_test_dictionary() -> Dictionary {
    read_dictionary_from_path(&*TEST_DICTIONARY_PATH).expect("Failed to load test dictionary")
}

// Helper function to get the expected theme from the text file
pub fn get_expected_theme(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix(EXPECTED_THEME_DIRECTIVE)
            .map(|theme| theme.trim().to_string())
    })
}

// Helper function to get the expected top words, in rank order, from lines such as
// `EXPECTED_TOP: the 5`
pub fn get_expected_top_words(content: &str) -> Vec<RankedEntry> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(EXPECTED_TOP_DIRECTIVE))
        .map(|entry| {
            let (word, count) = entry
                .trim()
                .rsplit_once(' ')
                .expect("EXPECTED_TOP entries must be `<word> <count>`");

            let count = count
                .trim()
                .parse::<usize>()
                .expect("EXPECTED_TOP count must be a number");

            (word.trim().to_string(), count)
        })
        .collect()
}

/// Removes directive lines so only the document body is analyzed.
pub fn filter_directive_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            let line = line.trim_start();

            !line.starts_with(EXPECTED_THEME_DIRECTIVE)
                && !line.starts_with(EXPECTED_TOP_DIRECTIVE)
                && !line.starts_with(COMMENT_DIRECTIVE)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Runs the theme and top-word checks declared in a fixture file.
///
/// Returns the number of mismatches. With `use_assertions` the first mismatch panics
/// instead.
pub fn run_test_for_file(
    test_file_path: &Path,
    analyzer: &TextAnalyzer,
    use_assertions: bool,
) -> usize {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let filtered_text = filter_directive_lines(&raw_text);

    eprintln!("Testing file: {:?}", test_file_path);

    let mut error_count = 0;

    if let Some(expected_theme) = get_expected_theme(&raw_text) {
        let classification = analyzer.classify_text(&filtered_text).to_string();

        if classification != expected_theme {
            error_count += 1;
        }

        if use_assertions {
            assert_eq!(
                classification, expected_theme,
                "{:?} - Expected theme {:?}, but got {:?}",
                test_file_path, expected_theme, classification
            );
        }
    }

    let expected_top_words = get_expected_top_words(&raw_text);

    if !expected_top_words.is_empty() {
        let top_words = analyzer
            .top_words(&filtered_text, expected_top_words.len())
            .expect("Failed to rank words");

        if top_words != expected_top_words {
            error_count += 1;
        }

        if use_assertions {
            assert_eq!(
                top_words, expected_top_words,
                "{:?} - Expected top words {:?}, but got {:?}",
                test_file_path, expected_top_words, top_words
            );
        }
    }

    error_count
}
