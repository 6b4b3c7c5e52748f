use crate::models::Error;
use crate::types::{FrequencyMap, RankedEntry, ThemeScoreMap};
use std::cmp::Ordering;

/// Orders two ranked entries.
///
/// - **Primary:** count in descending order (higher count first).
/// - **Secondary:** label in ascending lexicographical order, so equal counts
///   always come out in the same order regardless of map iteration order.
fn compare_ranked_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Sorts `(label, count)` pairs into a ranked vector.
///
/// ### Example:
/// ```rust
/// use theme_sniffer::{sort_results, FrequencyMap};
///
/// let mut results = FrequencyMap::new();
/// results.insert("apple".to_string(), 10);
/// results.insert("tesla".to_string(), 15);
/// results.insert("google".to_string(), 10);
///
/// let sorted = sort_results(&results);
/// assert_eq!(sorted, vec![
///     ("tesla".to_string(), 15),
///     ("apple".to_string(), 10),
///     ("google".to_string(), 10)
/// ]);
/// ```
pub fn sort_results<'a, I>(results: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a String, &'a usize)>,
{
    let mut sorted_results: Vec<RankedEntry> = results
        .into_iter()
        .map(|(label, count)| (label.to_owned(), *count))
        .collect();

    sorted_results.sort_by(compare_ranked_entries);

    sorted_results
}

/// Returns the `n` highest-ranked entries of `results`.
///
/// The output has `min(n, results.len())` entries; asking for more entries than exist is not
/// an error. Asking for zero entries is rejected with [`Error::InvalidRankRequest`].
pub fn top_n<'a, I>(results: I, n: usize) -> Result<Vec<RankedEntry>, Error>
where
    I: IntoIterator<Item = (&'a String, &'a usize)>,
{
    if n == 0 {
        return Err(Error::InvalidRankRequest(n));
    }

    let mut sorted_results = sort_results(results);
    sorted_results.truncate(n);

    Ok(sorted_results)
}

/// Top-N view of a word frequency map.
pub fn top_n_words(frequencies: &FrequencyMap, n: usize) -> Result<Vec<RankedEntry>, Error> {
    top_n(frequencies, n)
}

/// Top-N view of theme scores.
pub fn top_n_themes(theme_scores: &ThemeScoreMap, n: usize) -> Result<Vec<RankedEntry>, Error> {
    top_n(
        theme_scores
            .iter()
            .map(|(theme_name, theme_score)| (theme_name, theme_score)),
        n,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(entries: &[(&str, usize)]) -> FrequencyMap {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_top_n_rejects_zero() {
        let map = frequencies(&[("cat", 1)]);
        assert!(matches!(
            top_n_words(&map, 0),
            Err(Error::InvalidRankRequest(0))
        ));
    }

    #[test]
    fn test_top_n_on_empty_map() {
        let map = FrequencyMap::new();
        assert_eq!(top_n_words(&map, 3).unwrap(), Vec::<RankedEntry>::new());
    }

    #[test]
    fn test_ties_broken_by_label() {
        let map = frequencies(&[("pear", 2), ("apple", 2), ("fig", 5), ("kiwi", 2)]);
        assert_eq!(
            top_n_words(&map, 3).unwrap(),
            vec![
                ("fig".to_string(), 5),
                ("apple".to_string(), 2),
                ("kiwi".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_top_n_themes_keeps_zero_scores() {
        let scores: ThemeScoreMap = vec![("tech".to_string(), 0), ("sports".to_string(), 4)];
        assert_eq!(
            top_n_themes(&scores, 5).unwrap(),
            vec![("sports".to_string(), 4), ("tech".to_string(), 0)]
        );
    }
}
