//! Shared PDF handling utilities
//!
//! Thin wrapper over `lopdf` (structure, encryption, page count) and
//! `pdf-extract` (text content). The rest of the pipeline only ever sees
//! plain text.

pub mod parser;

pub use parser::{extract_document, ExtractedText, PdfError};
