#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of word characters (apostrophes kept inside contractions) or a
    // single non-whitespace punctuation mark, each as its own token.
    static ref TOKEN: Regex = Regex::new(r"[\w']+|[^\w\s]").unwrap();
}

/// Split free text into an ordered sequence of word tokens.
///
/// Punctuation marks come out as standalone tokens; token order follows the
/// input. Callers that treat hyphens as separators pre-split them into
/// spaces before calling this.
pub fn words(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(words("Third Eye Blind"), vec!["Third", "Eye", "Blind"]);
    }

    #[test]
    fn punctuation_becomes_standalone_tokens() {
        assert_eq!(
            words("Hello, world!"),
            vec!["Hello", ",", "world", "!"]
        );
    }

    #[test]
    fn contractions_stay_whole() {
        assert_eq!(words("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(
            words("a (quick) test."),
            vec!["a", "(", "quick", ")", "test", "."]
        );
    }
}
