use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lower-cased, whitespace-delimited
/// units of text extracted from a document.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A word as stored in a `FrequencyMap`: a token with every forbidden character removed.
/// Never empty.
pub type Word = String;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts within a text document.
/// The key is the sanitized `Word`, and the value is the `WordFrequency`.
pub type FrequencyMap = HashMap<Word, WordFrequency>;

/// Represents the name of a theme as an owned `String`.
pub type ThemeName = String;

/// A keyword associated with a theme. Matched as a case-insensitive substring of tokens.
pub type Keyword = String;

/// Number of keyword matches recorded for a theme during one classification pass.
pub type ThemeScore = usize;

/// Scores for every theme of a dictionary, in dictionary order.
pub type ThemeScoreMap = Vec<(ThemeName, ThemeScore)>;

/// A single `(label, count)` row of a ranked view, where the label is either a word or a
/// theme name.
pub type RankedEntry = (String, usize);
