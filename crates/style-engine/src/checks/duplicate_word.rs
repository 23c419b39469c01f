//! Duplicate-word check: immediately repeated tokens within a sentence

use anyhow::Result;
use shared_types::{Issue, IssueKind, Severity, TextPosition};

use super::{clip, ScanContext};
use crate::tokens;

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for sentence in ctx.sentences {
        let words = tokens::words(&sentence.text);
        for (pos, pair) in words.windows(2).enumerate() {
            if !pair[0].eq_ignore_ascii_case(pair[1]) {
                continue;
            }

            issues.push(Issue {
                kind: IssueKind::DuplicateWord,
                severity: Severity::Warning,
                sentence_index: Some(sentence.index),
                position: Some(TextPosition {
                    start_offset: sentence.start,
                    end_offset: sentence.end,
                }),
                message: format!(
                    "Word '{}' is repeated (word positions {}-{})",
                    pair[0].to_ascii_lowercase(),
                    pos,
                    pos + 1
                ),
                snippet: Some(clip(&sentence.text)),
            });
        }
    }

    Ok(issues)
}
