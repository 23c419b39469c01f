//! Long bullet point check (document-scoped)

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, IssueKind, Severity, TextPosition};

use super::{clip, ScanContext};
use crate::tokens;

lazy_static! {
    static ref BULLET_RE: Regex = Regex::new(r"^\s*[-*•]\s+").unwrap();
}

/// Bullet lines with strictly more words than this are flagged.
pub const MAX_BULLET_WORDS: usize = 20;

pub fn check(ctx: &ScanContext) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    let mut offset = 0usize; // character offset of the current line

    // walk terminator-inclusive so CRLF lines advance the offset by their
    // real width
    for raw in ctx.text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if BULLET_RE.is_match(line) {
            let count = tokens::word_count(line);
            if count > MAX_BULLET_WORDS {
                issues.push(Issue {
                    kind: IssueKind::LongBullet,
                    severity: Severity::Info,
                    sentence_index: None,
                    position: Some(TextPosition {
                        start_offset: offset,
                        end_offset: offset + line.chars().count(),
                    }),
                    message: format!(
                        "Bullet point has {count} words (threshold {MAX_BULLET_WORDS}); tighten it"
                    ),
                    snippet: Some(clip(line.trim())),
                });
            }
        }

        offset += raw.chars().count();
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Issue> {
        check(&ScanContext::new(text, &[], None)).unwrap()
    }

    fn bullet_of(n: usize) -> String {
        format!("- {}", vec!["word"; n].join(" "))
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(run(&bullet_of(20)).is_empty());
        let issues = run(&bullet_of(21));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("21 words"));
    }

    #[test]
    fn test_non_bullet_lines_ignored() {
        let long_line = vec!["word"; 30].join(" ");
        assert!(run(&long_line).is_empty());
    }

    #[test]
    fn test_star_and_dot_markers() {
        let text = format!("* {}\n• {}", vec!["w"; 25].join(" "), vec!["w"; 25].join(" "));
        assert_eq!(run(&text).len(), 2);
    }

    #[test]
    fn test_position_tracks_line_offsets() {
        let text = format!("intro line\n{}", bullet_of(25));
        let issues = run(&text);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].position.unwrap().start_offset, 11);
    }

    #[test]
    fn test_crlf_line_endings_do_not_drift_offsets() {
        // two CRLF lines before the bullet: 7 + 7 = 14 characters
        let text = format!("intro\r\nlines\r\n{}", bullet_of(25));
        let issues = run(&text);
        assert_eq!(issues.len(), 1);
        let position = issues[0].position.unwrap();
        assert_eq!(position.start_offset, 14);
        // the carriage return is not part of the flagged span
        assert_eq!(position.end_offset, 14 + bullet_of(25).chars().count());
    }
}
