//! Spelling check against the embedded dictionary

use std::collections::HashSet;

use anyhow::Result;
use shared_types::{Issue, IssueKind, Severity};

use super::{clip, ScanContext};
use crate::tokens;

/// Tokens shorter than this are never checked.
const MIN_TOKEN_LEN: usize = 3;

/// Suggestions attached to each flagged token.
const MAX_SUGGESTIONS: usize = 3;

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    // dictionary unavailable: the check contributes nothing
    let Some(dict) = ctx.dictionary else {
        return Ok(Vec::new());
    };

    let mut issues = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for sentence in ctx.sentences {
        for word in tokens::words(&sentence.text) {
            let lower = word.to_ascii_lowercase();

            if lower.len() < MIN_TOKEN_LEN
                || lower.contains('\'')
                || tokens::is_stopword(&lower)
            {
                continue;
            }
            // all-caps tokens are acronyms; the all-caps check covers them
            if word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
                continue;
            }
            if dict.contains(&lower) {
                continue;
            }
            // flag each distinct token once per document
            if !seen.insert(lower.clone()) {
                continue;
            }

            let suggestions = dict.suggest(&lower, MAX_SUGGESTIONS);
            let message = if suggestions.is_empty() {
                format!("Possible misspelling: '{lower}'")
            } else {
                format!(
                    "Possible misspelling: '{lower}' (did you mean {}?)",
                    suggestions.join(", ")
                )
            };

            issues.push(Issue {
                kind: IssueKind::Spelling,
                severity: Severity::Info,
                sentence_index: Some(sentence.index),
                position: None,
                message,
                snippet: Some(clip(&sentence.text)),
            });
        }
    }

    Ok(issues)
}
