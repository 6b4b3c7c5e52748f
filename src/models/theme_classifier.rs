use crate::constants::NO_THEME_FOUND;
use crate::models::Dictionary;
use crate::types::{Keyword, Token, ThemeName, ThemeScore, ThemeScoreMap};
use log::debug;
use std::fmt;

/// Outcome of classifying a document against a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeClassification {
    /// The theme with the highest number of keyword matches.
    Theme { name: ThemeName, score: ThemeScore },
    /// No keyword of any theme matched any token.
    Undetermined,
}

impl ThemeClassification {
    pub fn theme_name(&self) -> Option<&str> {
        match self {
            ThemeClassification::Theme { name, .. } => Some(name.as_str()),
            ThemeClassification::Undetermined => None,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, ThemeClassification::Undetermined)
    }
}

impl fmt::Display for ThemeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeClassification::Theme { name, .. } => write!(f, "{}", name),
            ThemeClassification::Undetermined => write!(f, "{}", NO_THEME_FOUND),
        }
    }
}

/// Scores tokens against the keywords of a dictionary.
///
/// Keywords are lower-cased once up front; tokens are expected to be lower-cased already.
pub struct ThemeClassifier<'a> {
    dictionary: &'a Dictionary,
    lowercased_keywords: Vec<Vec<Keyword>>,
}

impl<'a> ThemeClassifier<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let lowercased_keywords: Vec<Vec<Keyword>> = dictionary
            .iter()
            .map(|(_, keywords)| {
                keywords
                    .iter()
                    .map(|keyword| keyword.to_lowercase())
                    .collect()
            })
            .collect();

        Self {
            dictionary,
            lowercased_keywords,
        }
    }

    /// Counts, for every theme, the `(token, keyword)` pairs where the keyword is a
    /// substring of the token.
    ///
    /// The returned scores are in dictionary order and include themes with a score of 0.
    pub fn score_tokens<I>(&self, tokens: I) -> ThemeScoreMap
    where
        I: IntoIterator<Item = Token>,
    {
        let mut scores: Vec<ThemeScore> = vec![0; self.lowercased_keywords.len()];
        let mut token_count = 0;

        for token in tokens {
            token_count += 1;

            for (theme_index, keywords) in self.lowercased_keywords.iter().enumerate() {
                scores[theme_index] += keywords
                    .iter()
                    .filter(|keyword| token.contains(keyword.as_str()))
                    .count();
            }
        }

        let theme_scores: ThemeScoreMap = self
            .dictionary
            .theme_names()
            .cloned()
            .zip(scores)
            .collect();

        debug!(
            "Scored {} tokens against {} themes: {:?}",
            token_count,
            theme_scores.len(),
            theme_scores
        );

        theme_scores
    }

    /// Picks the best theme for the given tokens.
    ///
    /// Ties go to the theme listed first in the dictionary. If nothing matched at all
    /// (including an empty dictionary or an empty document) the result is
    /// [`ThemeClassification::Undetermined`].
    pub fn classify<I>(&self, tokens: I) -> ThemeClassification
    where
        I: IntoIterator<Item = Token>,
    {
        let theme_scores = self.score_tokens(tokens);

        Self::select_theme(theme_scores)
    }

    fn select_theme(theme_scores: ThemeScoreMap) -> ThemeClassification {
        let mut best: Option<(ThemeName, ThemeScore)> = None;

        for (theme_name, theme_score) in theme_scores {
            let is_better = match &best {
                Some((_, best_score)) => theme_score > *best_score,
                None => theme_score > 0,
            };

            if is_better {
                best = Some((theme_name, theme_score));
            }
        }

        match best {
            Some((name, score)) => ThemeClassification::Theme { name, score },
            None => ThemeClassification::Undetermined,
        }
    }
}
