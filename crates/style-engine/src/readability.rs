//! Flesch readability scoring
//!
//! Implements the published Flesch Reading Ease and Flesch-Kincaid Grade
//! formulas over the same tokenizer and segmenter the checks use. The
//! syllable counter is the usual vowel-group heuristic, so scores track
//! the standard tools closely but not exactly.

use shared_types::ReadabilityScore;

use crate::segmenter;
use crate::tokens;

/// Score the full document text.
///
/// Returns `None` when the text has no countable words; empty input has
/// no defined score rather than a numeric sentinel.
pub fn score(text: &str) -> Option<ReadabilityScore> {
    let words = tokens::words(text);
    if words.is_empty() {
        return None;
    }

    let sentence_count = segmenter::split_sentences(text).len().max(1);
    let syllable_count: usize = words.iter().map(|w| syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / words.len() as f64;

    let flesch_reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let flesch_kincaid_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    Some(ReadabilityScore {
        flesch_reading_ease: round1(flesch_reading_ease),
        flesch_kincaid_grade: round1(flesch_kincaid_grade).max(0.0),
        label: label(flesch_reading_ease).to_string(),
    })
}

/// Band label for a Flesch Reading Ease value, per the standard table.
pub fn label(flesch: f64) -> &'static str {
    if flesch >= 90.0 {
        "very easy"
    } else if flesch >= 80.0 {
        "easy"
    } else if flesch >= 70.0 {
        "fairly easy"
    } else if flesch >= 60.0 {
        "plain English"
    } else if flesch >= 50.0 {
        "fairly difficult"
    } else if flesch >= 30.0 {
        "difficult"
    } else {
        "very confusing"
    }
}

/// Heuristic syllable count: vowel groups, minus a silent final "e",
/// never below one.
pub fn syllables(word: &str) -> usize {
    let lower = word.to_ascii_lowercase();
    let chars: Vec<char> = lower.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if chars.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for &c in &chars {
        let v = is_vowel(c);
        if v && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = v;
    }

    // silent final e: "make", "like" — but not "the" or words ending "le"
    if count > 1
        && chars.last() == Some(&'e')
        && chars.len() >= 2
        && !is_vowel(chars[chars.len() - 2])
        && chars[chars.len() - 2] != 'l'
    {
        count -= 1;
    }

    count.max(1)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counts() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("sentence"), 2);
        assert_eq!(syllables("beautiful"), 3);
        assert_eq!(syllables("a"), 1);
    }

    #[test]
    fn test_empty_text_has_no_score() {
        assert!(score("").is_none());
        assert!(score("   \n ").is_none());
        assert!(score("123 456").is_none());
    }

    #[test]
    fn test_simple_text_scores_easy() {
        let s = score("The cat sat. The dog ran. We like it.").unwrap();
        assert!(
            s.flesch_reading_ease > 80.0,
            "expected easy text, got {}",
            s.flesch_reading_ease
        );
        assert!(s.flesch_kincaid_grade < 4.0);
    }

    #[test]
    fn test_dense_text_scores_harder_than_simple_text() {
        let simple = score("The cat sat on the mat. It was fun.").unwrap();
        let dense = score(
            "Organizational responsibilities necessitate comprehensive documentation \
             methodologies throughout institutional administrative infrastructures.",
        )
        .unwrap();
        assert!(dense.flesch_reading_ease < simple.flesch_reading_ease);
        assert!(dense.flesch_kincaid_grade > simple.flesch_kincaid_grade);
    }

    #[test]
    fn test_labels_cover_bands() {
        assert_eq!(label(95.0), "very easy");
        assert_eq!(label(65.0), "plain English");
        assert_eq!(label(40.0), "difficult");
        assert_eq!(label(10.0), "very confusing");
    }
}
