use crate::constants::FORBIDDEN_CHARACTERS;
use crate::types::TokenRef;

/// Removes every forbidden character from a token.
///
/// Interior occurrences are removed as well (`"e-mail"` becomes `"email"`), and the order of
/// the remaining characters is preserved. The result may be empty; callers counting words
/// must discard empty results.
///
/// # Example
/// ```
/// use theme_sniffer::sanitize_token;
///
/// assert_eq!(sanitize_token("well-known,"), "wellknown");
/// assert_eq!(sanitize_token("?!"), "");
/// ```
pub fn sanitize_token(token: &TokenRef) -> String {
    token
        .chars()
        .filter(|c| !FORBIDDEN_CHARACTERS.contains(c))
        .collect()
}
