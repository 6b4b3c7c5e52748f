use theme_sniffer::{sanitize_token, tokenize, Token};

fn collect_tokens(text: &str) -> Vec<Token> {
    tokenize(text).collect()
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_tokens() {
        let text = "These Are MIXED case Tokens";
        let tokens = collect_tokens(text);
        assert_eq!(tokens, vec!["these", "are", "mixed", "case", "tokens"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let text = "This    is   a    test   string";
        let tokens = collect_tokens(text);
        assert_eq!(tokens, vec!["this", "is", "a", "test", "string"]);
    }

    #[test]
    fn test_tokenize_with_tabs() {
        let text = "This\tis\ta\ttest";
        let tokens = collect_tokens(text);
        assert_eq!(tokens, vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let text = "  This  is\n   a test\tstring\r\n\nwith   mixed   whitespace \n\t ";
        let tokens = collect_tokens(text);
        assert_eq!(
            tokens,
            vec!["this", "is", "a", "test", "string", "with", "mixed", "whitespace"]
        );
    }

    #[test]
    fn test_tokenize_empty_string() {
        assert_eq!(collect_tokens(""), Vec::<Token>::new());
        assert_eq!(collect_tokens(" \n\t "), Vec::<Token>::new());
    }

    #[test]
    fn test_tokenize_does_not_strip_punctuation() {
        let text = "Alphabet, Inc. (Google) - e-mail!";
        let tokens = collect_tokens(text);
        assert_eq!(
            tokens,
            vec!["alphabet,", "inc.", "(google)", "-", "e-mail!"]
        );
    }

    #[test]
    fn test_tokenize_is_lazy() {
        let mut tokens = tokenize("first second third");
        assert_eq!(tokens.next().as_deref(), Some("first"));
        assert_eq!(tokens.next().as_deref(), Some("second"));
    }
}

#[cfg(test)]
mod sanitizer_tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_interior_characters() {
        assert_eq!(sanitize_token("e-mail"), "email");
        assert_eq!(sanitize_token("a/b:c;d"), "abcd");
    }

    #[test]
    fn test_sanitize_strips_surrounding_characters() {
        assert_eq!(sanitize_token("...why?!"), "why");
    }

    #[test]
    fn test_sanitize_punctuation_only_token_is_empty() {
        assert_eq!(sanitize_token("--"), "");
        assert_eq!(sanitize_token(",;"), "");
    }

    #[test]
    fn test_sanitize_preserves_unicode() {
        assert_eq!(sanitize_token("привет,"), "привет");
        assert_eq!(sanitize_token("naïve-ish"), "naïveish");
    }

    #[test]
    fn test_sanitize_is_idempotent_on_tokens() {
        for token in collect_tokens("a,b;c:d. e!f?g/h-i done. -- x--y") {
            let once = sanitize_token(&token);
            assert_eq!(sanitize_token(&once), once);
        }
    }
}
