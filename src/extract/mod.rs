//! PDF text extraction.
//!
//! Pulls the text layer out of an uploaded PDF, page by page. Scanned
//! documents with no text layer are reported as an error rather than
//! silently producing an empty analysis.

use lopdf::Document as PdfDocument;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while extracting text from an upload.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not read PDF: {0}")]
    InvalidPdf(String),

    #[error("no extractable text in document")]
    NoText,
}

/// Result of text extraction.
#[derive(Debug)]
pub struct ExtractionResult {
    /// Concatenated text of all pages, in page order.
    pub text: String,
    /// Number of pages in the document.
    pub page_count: u32,
}

/// Extracts the text layer from PDF bytes.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract page-ordered text from an in-memory PDF.
    ///
    /// Pages whose text cannot be decoded contribute an empty string, so
    /// a partially damaged document still yields whatever text the rest
    /// of its pages carry.
    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let doc =
            PdfDocument::load_mem(bytes).map_err(|e| ExtractionError::InvalidPdf(e.to_string()))?;

        let pages = doc.get_pages();
        let page_count = pages.len() as u32;

        let mut text = String::new();
        for (page_number, _) in pages {
            let page_text = doc.extract_text(&[page_number]).unwrap_or_default();
            text.push_str(&page_text);
        }

        if text.trim().is_empty() {
            return Err(ExtractionError::NoText);
        }

        debug!(page_count, chars = text.len(), "extracted PDF text");
        Ok(ExtractionResult { text, page_count })
    }
}
