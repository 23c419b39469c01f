//! Long-sentence check

use anyhow::Result;
use shared_types::{Issue, IssueKind, Severity, TextPosition};

use super::{clip, ScanContext};
use crate::tokens;

/// Sentences with strictly more words than this are flagged.
pub const WORD_THRESHOLD: usize = 25;

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for sentence in ctx.sentences {
        let count = tokens::word_count(&sentence.text);
        if count <= WORD_THRESHOLD {
            continue;
        }

        // double the threshold reads badly enough to warrant a warning
        let severity = if count > WORD_THRESHOLD * 2 {
            Severity::Warning
        } else {
            Severity::Info
        };

        issues.push(Issue {
            kind: IssueKind::LongSentence,
            severity,
            sentence_index: Some(sentence.index),
            position: Some(TextPosition {
                start_offset: sentence.start,
                end_offset: sentence.end,
            }),
            message: format!(
                "Sentence has {count} words (threshold {WORD_THRESHOLD}); consider splitting it"
            ),
            snippet: Some(clip(&sentence.text)),
        });
    }

    Ok(issues)
}
