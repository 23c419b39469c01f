//! Embedded dictionary for the spelling check
//!
//! The word list is a curated set of common English words compiled into
//! the binary. Lookups fall back to stripping regular inflection suffixes
//! so the list does not have to carry every plural and participle.
//! Suggestions are single-edit variants that are themselves dictionary
//! words, the same scheme classic spell checkers use.

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

static WORD_LIST: &str = include_str!("../assets/words.txt");

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Error)]
pub enum SpellError {
    #[error("embedded word list parsed to an empty dictionary")]
    EmptyWordList,
}

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Parse the embedded word list. One word per line; blank lines and
    /// `#` comments are skipped.
    pub fn load() -> Result<Self, SpellError> {
        let words: HashSet<String> = WORD_LIST
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_ascii_lowercase)
            .collect();

        if words.is_empty() {
            return Err(SpellError::EmptyWordList);
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if `token` (lowercase) is a known word, directly or after
    /// stripping a regular inflection suffix.
    pub fn contains(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        self.stems(token).iter().any(|s| self.words.contains(s))
    }

    /// Candidate base forms for an inflected token: "cats" -> "cat",
    /// "stopped" -> "stop", "moving" -> "move", "quickly" -> "quick".
    fn stems(&self, token: &str) -> Vec<String> {
        let mut stems = Vec::new();

        let mut strip = |suffix: &str, restore_e: bool, undouble: bool| {
            if let Some(base) = token.strip_suffix(suffix) {
                if base.len() >= 3 {
                    stems.push(base.to_string());
                    if restore_e {
                        // "danc(ing)" -> "dance"
                        stems.push(format!("{base}e"));
                    }
                    if undouble {
                        // "stopp(ed)" -> "stop"
                        let bytes = base.as_bytes();
                        if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                            stems.push(base[..base.len() - 1].to_string());
                        }
                    }
                }
            }
        };

        strip("'s", false, false);
        strip("s", false, false);
        strip("es", false, false);
        strip("d", false, false);
        strip("ed", false, true);
        strip("ing", true, true);
        strip("ly", false, false);
        strip("er", true, true);
        strip("est", true, true);

        // "studies" -> "study"
        if let Some(base) = token.strip_suffix("ies") {
            if base.len() >= 2 {
                stems.push(format!("{base}y"));
            }
        }

        stems
    }

    /// Up to `max` dictionary words one edit away from `token`, in
    /// alphabetical order.
    pub fn suggest(&self, token: &str, max: usize) -> Vec<String> {
        let mut found: BTreeSet<String> = BTreeSet::new();

        for candidate in edits1(token) {
            if self.words.contains(&candidate) {
                found.insert(candidate);
            }
        }

        found.into_iter().take(max).collect()
    }
}

/// All strings one edit (delete, transpose, replace, insert) away from
/// `token`. Assumes lowercase ASCII input.
fn edits1(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut out = Vec::new();

    // deletes
    for i in 0..chars.len() {
        let mut v = chars.clone();
        v.remove(i);
        out.push(v.iter().collect());
    }

    // transposes
    for i in 0..chars.len().saturating_sub(1) {
        let mut v = chars.clone();
        v.swap(i, i + 1);
        out.push(v.iter().collect());
    }

    // replaces
    for i in 0..chars.len() {
        for &b in ALPHABET {
            let mut v = chars.clone();
            v[i] = b as char;
            out.push(v.iter().collect());
        }
    }

    // inserts
    for i in 0..=chars.len() {
        for &b in ALPHABET {
            let mut v = chars.clone();
            v.insert(i, b as char);
            out.push(v.iter().collect());
        }
    }

    out
}
