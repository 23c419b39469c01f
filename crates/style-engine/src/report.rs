//! Markdown rendering of an analysis report, for the download feature

use shared_types::{AnalysisReport, Issue};

/// Issues listed in the detailed section before truncation.
const MAX_LISTED_ISSUES: usize = 50;

pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# Prose Report\n\n");

    out.push_str("## Summary\n\n");
    out.push_str(&format!("- Words: {}\n", report.summary.words));
    out.push_str(&format!("- Sentences: {}\n", report.summary.sentences));
    out.push_str(&format!(
        "- Average words per sentence: {:.2}\n",
        report.summary.avg_words_per_sentence
    ));

    if let Some(score) = &report.readability {
        out.push_str(&format!(
            "- Flesch Reading Ease: {:.1} ({})\n",
            score.flesch_reading_ease, score.label
        ));
        out.push_str(&format!(
            "- Flesch-Kincaid Grade: {:.1}\n",
            score.flesch_kincaid_grade
        ));
    }

    out.push_str("\n## Suggestions\n\n");
    for suggestion in &report.suggestions {
        out.push_str(&format!("- {suggestion}\n"));
    }

    if !report.issues.is_empty() {
        out.push_str("\n## Issues\n\n");
        for issue in report.issues.iter().take(MAX_LISTED_ISSUES) {
            out.push_str(&format_issue(issue));
        }
        if report.issues.len() > MAX_LISTED_ISSUES {
            out.push_str(&format!(
                "\n…and {} more.\n",
                report.issues.len() - MAX_LISTED_ISSUES
            ));
        }
    }

    out
}

fn format_issue(issue: &Issue) -> String {
    let location = match issue.sentence_index {
        Some(index) => format!("sentence {}", index + 1),
        None => "document".to_string(),
    };
    format!("- **{:?}** ({location}): {}\n", issue.kind, issue.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DocumentSummary, IssueKind, Severity};

    fn report_with(issues: Vec<Issue>) -> AnalysisReport {
        AnalysisReport {
            document_id: "doc-1".to_string(),
            summary: DocumentSummary {
                words: 12,
                sentences: 2,
                avg_words_per_sentence: 6.0,
            },
            readability: None,
            issues,
            suggestions: vec!["Looks good! No major issues detected by the basic checks.".into()],
            analyzed_at: 0,
        }
    }

    #[test]
    fn test_renders_summary_and_suggestions() {
        let md = render_markdown(&report_with(vec![]));
        assert!(md.starts_with("# Prose Report"));
        assert!(md.contains("- Words: 12"));
        assert!(md.contains("Looks good"));
        assert!(!md.contains("## Issues"));
    }

    #[test]
    fn test_renders_issue_locations() {
        let issue = Issue {
            kind: IssueKind::LongSentence,
            severity: Severity::Info,
            sentence_index: Some(0),
            position: None,
            message: "Sentence has 30 words".to_string(),
            snippet: None,
        };
        let md = render_markdown(&report_with(vec![issue]));
        assert!(md.contains("**LongSentence** (sentence 1)"));
    }

    #[test]
    fn test_truncates_long_issue_lists() {
        let issues: Vec<Issue> = (0..60)
            .map(|i| Issue {
                kind: IssueKind::Spelling,
                severity: Severity::Info,
                sentence_index: Some(i),
                position: None,
                message: format!("issue {i}"),
                snippet: None,
            })
            .collect();
        let md = render_markdown(&report_with(issues));
        assert!(md.contains("…and 10 more."));
    }
}
