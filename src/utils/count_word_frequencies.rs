use crate::types::{FrequencyMap, Token};
use crate::utils::sanitize_token;

/// Counts the frequency of words in the given token stream.
///
/// Every token is passed through [`sanitize_token`]; tokens which become empty (for example
/// a lone `"-"`) are not counted.
///
/// # Arguments
/// * `tokens` - Lower-cased tokens, typically produced by [`tokenize`](crate::tokenize).
///
/// # Returns
/// * A `HashMap` where the keys are sanitized words and the values are their
///   respective frequencies.
///
/// # Example
/// ```
/// use theme_sniffer::{count_word_frequencies, tokenize};
///
/// let frequencies = count_word_frequencies(tokenize("a, b; a. c!"));
/// assert_eq!(frequencies.get("a"), Some(&2));
/// assert_eq!(frequencies.get("b"), Some(&1));
/// assert_eq!(frequencies.len(), 3);
/// ```
pub fn count_word_frequencies<I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = Token>,
{
    let mut frequencies = FrequencyMap::new();

    for token in tokens {
        let word = sanitize_token(&token);

        if word.is_empty() {
            continue;
        }

        *frequencies.entry(word).or_insert(0) += 1;
    }

    frequencies
}
