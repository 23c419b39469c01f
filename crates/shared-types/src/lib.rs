//! Shared data model for the prose checker
//!
//! Plain serde-derived types passed between the PDF extractor, the style
//! engine, and the API server. No behavior lives here beyond constructors
//! and ordering helpers.

pub mod types;

pub use types::{
    AnalysisReport, Document, DocumentSummary, Issue, IssueKind, ReadabilityScore, Sentence,
    Severity, TextPosition,
};
