//! Adverb-heavy sentence check

use anyhow::Result;
use shared_types::{Issue, IssueKind, Severity, TextPosition};

use super::{clip, ScanContext};
use crate::tokens;

/// Sentences with at least this many "-ly" words are flagged.
pub const ADVERB_THRESHOLD: usize = 3;

/// Words like "only", "family", "supply" end in -ly without being
/// adverbs; a short allowlist removes the worst offenders.
const NOT_ADVERBS: &[&str] = &[
    "only", "family", "supply", "apply", "reply", "early", "likely", "assembly", "fly", "july",
    "italy", "belly", "bully", "jelly", "rally", "ally", "tally", "holy", "ugly",
];

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for sentence in ctx.sentences {
        let count = tokens::words(&sentence.text)
            .iter()
            .map(|w| w.to_ascii_lowercase())
            .filter(|w| w.len() > 3 && w.ends_with("ly") && !NOT_ADVERBS.contains(&w.as_str()))
            .count();

        if count < ADVERB_THRESHOLD {
            continue;
        }

        issues.push(Issue {
            kind: IssueKind::AdverbHeavy,
            severity: Severity::Info,
            sentence_index: Some(sentence.index),
            position: Some(TextPosition {
                start_offset: sentence.start,
                end_offset: sentence.end,
            }),
            message: format!("Sentence leans on {count} \"-ly\" adverbs; consider trimming"),
            snippet: Some(clip(&sentence.text)),
        });
    }

    Ok(issues)
}
