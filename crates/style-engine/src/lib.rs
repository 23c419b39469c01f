//! Prose analysis engine
//!
//! Takes the extracted text of one document through segmentation, the
//! issue scanner, and the readability scorer, and bundles the results
//! into an [`AnalysisReport`]. Everything is synchronous and pure over
//! its inputs; the only state an engine holds is the compiled spelling
//! dictionary.

pub mod checks;
pub mod readability;
pub mod report;
pub mod segmenter;
pub mod spell;
pub mod suggestions;
pub mod tokens;

use shared_types::{AnalysisReport, Document, DocumentSummary, Issue, Sentence};
use tracing::{debug, warn};

use checks::ScanContext;
use spell::Dictionary;

/// Analysis engine entry point. Build once, reuse across requests.
pub struct StyleEngine {
    dictionary: Option<Dictionary>,
}

impl StyleEngine {
    /// Load the spelling dictionary and return a ready engine. A failed
    /// dictionary load disables the spelling check but nothing else.
    pub fn new() -> Self {
        let dictionary = match Dictionary::load() {
            Ok(dict) => {
                debug!(words = dict.len(), "loaded spelling dictionary");
                Some(dict)
            }
            Err(e) => {
                warn!(error = %e, "spelling dictionary unavailable; spelling check disabled");
                None
            }
        };

        Self { dictionary }
    }

    /// Run the full pipeline over one document and return a fresh result
    /// bundle. No state is retained between calls.
    pub fn analyze(&self, document: &Document) -> AnalysisReport {
        let sentences = segmenter::split_sentences(&document.text);
        let issues = self.scan(&document.text, &sentences);
        let summary = summarize(&document.text, &sentences);
        let readability = readability::score(&document.text);
        let suggestions = suggestions::build(&summary, readability.as_ref(), &issues);

        debug!(
            document_id = %document.id,
            sentences = sentences.len(),
            issues = issues.len(),
            "analysis complete"
        );

        AnalysisReport {
            document_id: document.id.clone(),
            summary,
            readability,
            issues,
            suggestions,
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Run only the issue scanner over pre-segmented text.
    pub fn scan(&self, text: &str, sentences: &[Sentence]) -> Vec<Issue> {
        let ctx = ScanContext::new(text, sentences, self.dictionary.as_ref());
        checks::scan(&ctx)
    }

    /// Scan raw text (segmenting it first); convenient for tests.
    pub fn scan_text(&self, text: &str) -> Vec<Issue> {
        let sentences = segmenter::split_sentences(text);
        self.scan(text, &sentences)
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Word/sentence counts for the report header.
fn summarize(text: &str, sentences: &[Sentence]) -> DocumentSummary {
    let words = tokens::word_count(text);
    let avg = if sentences.is_empty() {
        0.0
    } else {
        let per_sentence: usize = sentences.iter().map(|s| tokens::word_count(&s.text)).sum();
        per_sentence as f64 / sentences.len() as f64
    };

    DocumentSummary {
        words,
        sentences: sentences.len(),
        avg_words_per_sentence: avg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::IssueKind;

    #[test]
    fn test_engine_detects_multiple_issue_kinds() {
        let engine = StyleEngine::new();
        let text = "The the cat sat on the mat. The wall was painted by the team. Ths is a tst.";
        let issues = engine.scan_text(text);

        assert!(issues.iter().any(|i| i.kind == IssueKind::DuplicateWord));
        assert!(issues.iter().any(|i| i.kind == IssueKind::PassiveVoice));
        assert!(issues.iter().any(|i| i.kind == IssueKind::Spelling));
    }

    #[test]
    fn test_engine_accepts_clean_text() {
        let engine = StyleEngine::new();
        let text = "The team wrote a short report. Each sentence stays simple and clear.";
        let issues = engine.scan_text(text);
        assert!(issues.is_empty(), "unexpected issues: {issues:#?}");
    }

    #[test]
    fn test_analyze_empty_document() {
        let engine = StyleEngine::new();
        let document = Document::new("empty.pdf", 1, "");
        let analysis = engine.analyze(&document);

        assert_eq!(analysis.summary.sentences, 0);
        assert_eq!(analysis.summary.words, 0);
        assert!(analysis.issues.is_empty());
        assert!(analysis.readability.is_none());
        // the all-clear line still appears
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[test]
    fn test_analyze_produces_sorted_issues() {
        let engine = StyleEngine::new();
        let document = Document::new(
            "sample.pdf",
            1,
            "Ths is a tst. The the dog ran. The wall was painted.",
        );
        let analysis = engine.analyze(&document);

        let keys: Vec<_> = analysis.issues.iter().map(|i| i.sort_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_analyze_reports_document_id_and_summary() {
        let engine = StyleEngine::new();
        let document = Document::new("sample.pdf", 2, "One two three. Four five.");
        let analysis = engine.analyze(&document);

        assert_eq!(analysis.document_id, document.id);
        assert_eq!(analysis.summary.sentences, 2);
        assert_eq!(analysis.summary.words, 5);
        assert!((analysis.summary.avg_words_per_sentence - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let engine = StyleEngine::new();
        let document = Document::new("same.pdf", 1, "The the cat sat. It was tested.");
        let first = engine.analyze(&document);
        let second = engine.analyze(&document);
        assert_eq!(first.issues, second.issues);
        assert_eq!(first.suggestions, second.suggestions);
    }
}
