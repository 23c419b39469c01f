//! Property-based tests for the style engine
//!
//! These use proptest to generate arbitrary inputs and verify the scan
//! invariants: totality, ordering, idempotence, and the long-sentence
//! threshold behavior.

use proptest::prelude::*;

use style_engine::checks::long_sentence::WORD_THRESHOLD;
use style_engine::segmenter::split_sentences;
use style_engine::StyleEngine;

proptest! {
    /// Property: segmentation is total over any string and never panics.
    #[test]
    fn segmenter_is_total(text in ".{0,400}") {
        let sentences = split_sentences(&text);
        // indices are contiguous from zero
        for (i, s) in sentences.iter().enumerate() {
            prop_assert_eq!(s.index, i);
        }
    }

    /// Property: sentence offsets are ordered and within the text.
    #[test]
    fn segmenter_offsets_are_ordered(text in ".{0,400}") {
        let char_len = text.chars().count();
        let sentences = split_sentences(&text);
        let mut prev_end = 0usize;
        for s in &sentences {
            prop_assert!(s.start >= prev_end);
            prop_assert!(s.start < s.end);
            prop_assert!(s.end <= char_len);
            prev_end = s.end;
        }
    }

    /// Property: scan never fails and returns issues sorted by sentence
    /// index then kind.
    #[test]
    fn scan_is_total_and_sorted(text in ".{0,400}") {
        let engine = StyleEngine::new();
        let issues = engine.scan_text(&text);
        let keys: Vec<_> = issues.iter().map(|i| i.sort_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// Property: scanning the same text twice yields identical output.
    #[test]
    fn scan_is_idempotent(text in "[ a-zA-Z.!?,\n]{0,300}") {
        let engine = StyleEngine::new();
        let first = engine.scan_text(&text);
        let second = engine.scan_text(&text);
        prop_assert_eq!(first, second);
    }

    /// Property: a single sentence of n words is flagged as long exactly
    /// when n exceeds the threshold.
    #[test]
    fn long_sentence_threshold_is_exact(n in 1usize..60) {
        use shared_types::IssueKind;

        let text = format!("{}.", vec!["word"; n].join(" "));
        let engine = StyleEngine::new();
        let issues = engine.scan_text(&text);
        let long_count = issues
            .iter()
            .filter(|i| i.kind == IssueKind::LongSentence)
            .count();

        if n > WORD_THRESHOLD {
            prop_assert_eq!(long_count, 1);
        } else {
            prop_assert_eq!(long_count, 0);
        }
    }
}
