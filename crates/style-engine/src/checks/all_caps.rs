//! All-caps word check (document-scoped)

use std::collections::BTreeMap;

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, IssueKind, Severity, TextPosition};

use super::{char_offset, ScanContext};

lazy_static! {
    static ref CAPS_RE: Regex = Regex::new(r"\b[A-Z]{5,}\b").unwrap();
}

/// At most this many distinct all-caps words are reported.
const MAX_REPORTED: usize = 20;

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    // word -> (count, first match byte range)
    let mut counts: BTreeMap<String, (usize, (usize, usize))> = BTreeMap::new();

    for m in CAPS_RE.find_iter(ctx.text) {
        counts
            .entry(m.as_str().to_string())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, (m.start(), m.end())));
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.0.cmp(&b.0)));

    let issues = ranked
        .into_iter()
        .take(MAX_REPORTED)
        .map(|(word, (count, (start, end)))| Issue {
            kind: IssueKind::AllCapsWord,
            severity: Severity::Info,
            sentence_index: None,
            position: Some(TextPosition {
                start_offset: char_offset(ctx.text, start),
                end_offset: char_offset(ctx.text, end),
            }),
            message: format!(
                "All-caps word '{word}' appears {count} time(s); consider normal capitalization"
            ),
            snippet: None,
        })
        .collect();

    Ok(issues)
}
