use crate::types::{Token, TokenRef};

/// Splits the text into individual tokens.
///
/// Tokens are separated by runs of Unicode whitespace and are lower-cased. Punctuation is
/// left in place; see [`sanitize_token`](crate::sanitize_token) for the frequency path.
///
/// The returned iterator is lazy and borrows `text`.
pub fn tokenize(text: &TokenRef) -> impl Iterator<Item = Token> + '_ {
    text.split_whitespace().map(|word| word.to_lowercase())
}
