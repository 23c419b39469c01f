//! Passive-voice check
//!
//! Lexical heuristic only: a be-auxiliary followed by a word ending in
//! "ed". Irregular participles ("written", "held") are missed and some
//! adjectives ("was tired") are false positives; that accuracy level is a
//! documented limitation, not a bug.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, IssueKind, Severity, TextPosition};

use super::{clip, ScanContext};

lazy_static! {
    static ref PASSIVE_RE: Regex =
        Regex::new(r"(?i)\b(is|are|was|were|be|been|being)\s+(\w+ed)\b").unwrap();
}

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for sentence in ctx.sentences {
        let Some(m) = PASSIVE_RE.find(&sentence.text) else {
            continue;
        };

        issues.push(Issue {
            kind: IssueKind::PassiveVoice,
            severity: Severity::Info,
            sentence_index: Some(sentence.index),
            position: Some(TextPosition {
                start_offset: sentence.start,
                end_offset: sentence.end,
            }),
            message: format!("Possible passive voice: \"{}\"", m.as_str()),
            snippet: Some(clip(&sentence.text)),
        });
    }

    Ok(issues)
}
