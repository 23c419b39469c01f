use serde::{Deserialize, Serialize};

/// Extracted plain text of one uploaded PDF. Created once per upload and
/// discarded when the request completes; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub pages: u32,
    pub text: String,
    pub created_at: u64,
}

impl Document {
    pub fn new(filename: impl Into<String>, pages: u32, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            pages,
            text: text.into(),
            created_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

/// A contiguous span of document text produced by segmentation.
///
/// `start` and `end` are character offsets into the document text; `text`
/// is the sentence content with interior line breaks collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Character offsets for highlighting a flagged region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPosition {
    pub start_offset: usize,
    pub end_offset: usize,
}

/// The category of a flagged writing issue.
///
/// Variant order doubles as the tie-break order when issues on the same
/// sentence are sorted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    LongSentence,
    DuplicateWord,
    PassiveVoice,
    AdverbHeavy,
    Spelling,
    AllCapsWord,
    LongBullet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

/// A single flagged writing problem. Immutable once created; the full set
/// is recomputed on every analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    /// Index of the offending sentence; `None` for document-scoped issues
    /// (all-caps words, long bullets), which sort after all sentence issues.
    pub sentence_index: Option<usize>,
    pub position: Option<TextPosition>,
    pub message: String,
    pub snippet: Option<String>,
}

impl Issue {
    /// Sort key: sentence index first, then kind. Document-scoped issues
    /// (no sentence index) come last.
    pub fn sort_key(&self) -> (usize, IssueKind) {
        (self.sentence_index.unwrap_or(usize::MAX), self.kind)
    }
}

/// Flesch scores plus a human-readable band label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScore {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub label: String,
}

/// Basic counts shown alongside the issue list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub words: usize,
    pub sentences: usize,
    pub avg_words_per_sentence: f64,
}

/// Result bundle for one analysis run over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub document_id: String,
    pub summary: DocumentSummary,
    /// `None` when the document has no countable words.
    pub readability: Option<ReadabilityScore>,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub analyzed_at: u64,
}
