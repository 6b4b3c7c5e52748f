use theme_sniffer::{
    count_words_in_text, extract_top_words_from_text, sanitize_token, sort_results, tokenize,
    top_n_words, Error, FrequencyMap,
};

fn frequency_map(entries: &[(&str, usize)]) -> FrequencyMap {
    entries
        .iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_two_animals() {
        let frequencies = count_words_in_text("cat dog cat bird dog cat");

        assert_eq!(
            top_n_words(&frequencies, 2).unwrap(),
            vec![("cat".to_string(), 3), ("dog".to_string(), 2)]
        );
    }

    #[test]
    fn test_punctuation_is_stripped_before_counting() {
        let frequencies = count_words_in_text("a, b; a. c!");
        assert_eq!(frequencies, frequency_map(&[("a", 2), ("b", 1), ("c", 1)]));
    }

    #[test]
    fn test_punctuation_only_tokens_vanish() {
        let frequencies = count_words_in_text("wait - what ?! -- ok...");
        assert_eq!(
            frequencies,
            frequency_map(&[("wait", 1), ("what", 1), ("ok", 1)])
        );
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let frequencies = count_words_in_text("Rust rust RUST rUsT");
        assert_eq!(frequencies, frequency_map(&[("rust", 4)]));
    }

    #[test]
    fn test_empty_document() {
        assert!(count_words_in_text("").is_empty());
        assert!(count_words_in_text("   \n").is_empty());
    }

    #[test]
    fn test_total_count_equals_non_empty_sanitized_tokens() {
        let text = "One fish, two fish. Red fish - blue fish!\n ... One more: fish/chips";

        let expected_total = tokenize(text)
            .map(|token| sanitize_token(&token))
            .filter(|word| !word.is_empty())
            .count();

        let frequencies = count_words_in_text(text);
        assert_eq!(frequencies.values().sum::<usize>(), expected_total);
        assert_eq!(frequencies.get("fish"), Some(&4));
        assert_eq!(frequencies.get("fishchips"), Some(&1));
    }

    #[test]
    fn test_keys_are_never_empty_or_forbidden() {
        let frequencies = count_words_in_text("a-b c/d e:f ; , . ! ? / - g");

        for word in frequencies.keys() {
            assert!(!word.is_empty());
            assert_eq!(&sanitize_token(word), word);
        }
    }

    #[test]
    fn test_n_larger_than_map_returns_everything() {
        let top_words = extract_top_words_from_text("beta alpha beta", 10).unwrap();
        assert_eq!(
            top_words,
            vec![("beta".to_string(), 2), ("alpha".to_string(), 1)]
        );
    }

    #[test]
    fn test_zero_is_an_invalid_rank_request() {
        let result = extract_top_words_from_text("beta alpha beta", 0);
        assert!(matches!(result, Err(Error::InvalidRankRequest(0))));
    }

    #[test]
    fn test_top_n_is_sorted_sub_multiset() {
        let frequencies = count_words_in_text("d c b a d c b d c d e e e e e f");

        for n in 1..=8 {
            let top_words = top_n_words(&frequencies, n).unwrap();

            assert_eq!(top_words.len(), n.min(frequencies.len()));
            assert!(top_words.windows(2).all(|pair| pair[0].1 >= pair[1].1));

            for (word, count) in &top_words {
                assert_eq!(frequencies.get(word), Some(count));
            }
        }
    }

    #[test]
    fn test_equal_counts_are_ordered_by_word() {
        let frequencies = count_words_in_text("zeta eta theta alpha");

        assert_eq!(
            sort_results(&frequencies),
            vec![
                ("alpha".to_string(), 1),
                ("eta".to_string(), 1),
                ("theta".to_string(), 1),
                ("zeta".to_string(), 1)
            ]
        );
    }
}
