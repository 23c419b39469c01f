//! API handlers for the prosecheck server

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use shared_types::{AnalysisReport, Document};

use crate::error::ApiError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "prosecheck-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Analyze request body: one PDF per invocation
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub filename: String,
    pub pdf_base64: String,
}

/// Raw text analysis request (skips PDF extraction)
#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// Uploaded document metadata echoed back to the client
#[derive(Serialize)]
pub struct DocumentInfo {
    pub id: String,
    pub filename: String,
    pub pages: u32,
    /// hex SHA-256 of the uploaded bytes
    pub document_hash: String,
    pub characters: usize,
}

/// Analysis response
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub document: DocumentInfo,
    /// Extracted plain text, for display next to the issue list
    pub text: String,
    pub report: AnalysisReport,
    /// Rendered markdown, for the "download report" button
    pub report_markdown: String,
}

/// Handler: POST /api/analyze
///
/// Decodes the uploaded PDF, extracts its text, and runs the analysis
/// pipeline. Extraction failures halt the pipeline and surface as 422.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let pdf_bytes = BASE64
        .decode(&req.pdf_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid PDF base64: {e}")))?;

    info!(
        filename = %req.filename,
        bytes = pdf_bytes.len(),
        "analyze request"
    );

    let document_hash = hex::encode(Sha256::digest(&pdf_bytes));
    let extracted = shared_pdf::extract_document(&pdf_bytes)?;
    let document = Document::new(req.filename, extracted.pages, extracted.text);

    Ok(Json(respond(&state, document, document_hash)))
}

/// Handler: POST /api/analyze/text
///
/// Same pipeline without extraction; useful for pasted text and for
/// exercising the analyzer without a PDF in hand.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    info!(characters = req.text.chars().count(), "analyze text request");

    let document_hash = hex::encode(Sha256::digest(req.text.as_bytes()));
    let document = Document::new("text-input", 0, req.text);

    Ok(Json(respond(&state, document, document_hash)))
}

/// Run the analysis and assemble the response bundle.
fn respond(state: &AppState, document: Document, document_hash: String) -> AnalyzeResponse {
    let report = state.engine.analyze(&document);
    let report_markdown = style_engine::report::render_markdown(&report);

    info!(
        document_id = %document.id,
        issues = report.issues.len(),
        "analysis complete"
    );

    AnalyzeResponse {
        success: true,
        document: DocumentInfo {
            id: document.id.clone(),
            filename: document.filename.clone(),
            pages: document.pages,
            document_hash,
            characters: document.text.chars().count(),
        },
        text: document.text,
        report,
        report_markdown,
    }
}
