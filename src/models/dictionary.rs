use crate::models::Error;
use crate::types::{Keyword, ThemeName};
use log::warn;
use std::collections::HashSet;

/// An ordered, immutable collection of themes and their keywords.
///
/// Order matters: it decides which theme wins when two themes tie during classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    themes: Vec<(ThemeName, Vec<Keyword>)>,
}

impl Dictionary {
    /// Builds a dictionary from `(theme, keywords)` pairs, keeping their order.
    ///
    /// Fails with [`Error::MalformedDictionary`] if a theme name occurs more than once.
    pub fn new<I, T, K>(themes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (T, Vec<K>)>,
        T: Into<ThemeName>,
        K: Into<Keyword>,
    {
        let mut seen_theme_names = HashSet::new();
        let mut ordered_themes = Vec::new();

        for (theme_name, keywords) in themes {
            let theme_name: ThemeName = theme_name.into();
            let keywords: Vec<Keyword> = keywords.into_iter().map(Into::into).collect();

            if !seen_theme_names.insert(theme_name.clone()) {
                return Err(Error::MalformedDictionary(format!(
                    "Duplicate theme name: {}",
                    theme_name
                )));
            }

            if keywords.is_empty() {
                warn!("Theme `{}` has no keywords and can never match", theme_name);
            } else if keywords.iter().any(|keyword| keyword.is_empty()) {
                warn!(
                    "Theme `{}` has an empty keyword, which matches every token",
                    theme_name
                );
            }

            ordered_themes.push((theme_name, keywords));
        }

        Ok(Self {
            themes: ordered_themes,
        })
    }

    /// Iterates over `(theme, keywords)` pairs in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ThemeName, &[Keyword])> {
        self.themes
            .iter()
            .map(|(theme_name, keywords)| (theme_name, keywords.as_slice()))
    }

    pub fn theme_names(&self) -> impl Iterator<Item = &ThemeName> {
        self.themes.iter().map(|(theme_name, _)| theme_name)
    }

    pub fn keywords(&self, theme_name: &str) -> Option<&[Keyword]> {
        self.themes
            .iter()
            .find(|(name, _)| name == theme_name)
            .map(|(_, keywords)| keywords.as_slice())
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
