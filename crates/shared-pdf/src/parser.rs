//! PDF text extraction

use thiserror::Error;
use tracing::debug;

/// Extraction failures. All of these halt the pipeline before analysis.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF is encrypted and cannot be analyzed")]
    Encrypted,

    #[error("failed to parse PDF structure: {0}")]
    Parse(String),

    #[error("failed to extract text: {0}")]
    Extraction(String),

    #[error("no extractable text found (the PDF may be a scanned image)")]
    Empty,
}

/// Plain text pulled out of a PDF, plus its page count.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub pages: u32,
}

/// Extract the plain text of a PDF from raw bytes.
///
/// Structure and encryption are checked with `lopdf` first so that a
/// password-protected file reports `Encrypted` rather than a generic
/// extraction failure. Text content comes from `pdf-extract`.
pub fn extract_document(bytes: &[u8]) -> Result<ExtractedText, PdfError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(PdfError::Encrypted);
    }

    let pages = doc.get_pages().len() as u32;
    debug!(pages, "parsed PDF structure");

    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Extraction(e.to_string()))?;

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(PdfError::Empty);
    }

    debug!(characters = text.chars().count(), "extracted text");
    Ok(ExtractedText { text, pages })
}

/// Clean up extractor output: CRLF to LF, trailing spaces stripped per
/// line, runs of blank lines collapsed to one, outer whitespace trimmed.
pub fn normalize_whitespace(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n");
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;

    for line in unified.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run <= 1 {
                lines.push("");
            }
        } else {
            blank_run = 0;
            lines.push(trimmed);
        }
    }

    lines.join("\n").trim().to_string()
}
