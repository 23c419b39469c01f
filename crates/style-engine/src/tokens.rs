//! Word tokenization shared by the segmenter, checks, and scorer

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A word is a run of ASCII letters, apostrophes allowed ("don't").
    pub static ref WORD_RE: Regex = Regex::new(r"[A-Za-z']+").unwrap();
}

/// All word tokens of `text`, in order.
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn word_count(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Small stopword set used to keep the spelling output quiet; matches the
/// most frequent English function words.
pub const STOPWORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
];

/// True if the lowercased token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_words_splits_on_punctuation_and_digits() {
        assert_eq!(words("Hello, world! 42 cats."), vec!["Hello", "world", "cats"]);
    }

    #[test]
    fn test_words_keeps_apostrophes() {
        assert_eq!(words("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_word_count_empty() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  ...  "), 0);
    }

    #[test]
    fn test_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("would"));
        assert!(!is_stopword("cat"));
    }
}
