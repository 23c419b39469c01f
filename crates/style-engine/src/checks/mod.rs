//! The issue scanner
//!
//! Each sub-check is a pure function with the uniform signature
//! `fn(&ScanContext) -> anyhow::Result<Vec<Issue>>`, composed through the
//! fixed ordered `CHECKS` list. Adding or removing a check means editing
//! that list, nothing else. A failing sub-check is logged and contributes
//! zero issues; `scan` itself never fails.

pub mod adverbs;
pub mod all_caps;
pub mod bullets;
pub mod duplicate_word;
pub mod long_sentence;
pub mod passive_voice;
pub mod spelling;

use shared_types::{Issue, Sentence};
use tracing::warn;

use crate::spell::Dictionary;

/// Immutable input for one scan pass.
pub struct ScanContext<'a> {
    pub text: &'a str,
    pub sentences: &'a [Sentence],
    /// `None` when the dictionary failed to load; the spelling check then
    /// yields nothing.
    pub dictionary: Option<&'a Dictionary>,
}

impl<'a> ScanContext<'a> {
    pub fn new(
        text: &'a str,
        sentences: &'a [Sentence],
        dictionary: Option<&'a Dictionary>,
    ) -> Self {
        Self {
            text,
            sentences,
            dictionary,
        }
    }
}

pub type CheckFn = fn(&ScanContext) -> anyhow::Result<Vec<Issue>>;

/// The scanner's sub-checks, in registration order.
pub const CHECKS: &[(&str, CheckFn)] = &[
    ("long_sentence", long_sentence::check),
    ("duplicate_word", duplicate_word::check),
    ("passive_voice", passive_voice::check),
    ("adverbs", adverbs::check),
    ("spelling", spelling::check),
    ("all_caps", all_caps::check),
    ("bullets", bullets::check),
];

/// Run every sub-check and return the combined issue list, sorted by
/// sentence index then kind. Document-scoped issues sort last. An empty
/// sentence sequence yields an empty list.
pub fn scan(ctx: &ScanContext) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (name, check) in CHECKS {
        match check(ctx) {
            Ok(found) => issues.extend(found),
            Err(e) => warn!(check = name, error = %e, "sub-check failed, contributing no issues"),
        }
    }

    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    issues
}

/// First 100 characters of a sentence, for issue snippets.
pub(crate) fn clip(text: &str) -> String {
    text.chars().take(100).collect()
}

/// Convert a byte offset (regex match) to the character offset used by
/// `TextPosition`.
pub(crate) fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}
