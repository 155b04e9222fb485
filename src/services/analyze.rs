//! The upload analysis pipeline.
//!
//! extract text -> classify -> build prompt -> model call -> parse ->
//! project onto the stored shape. Persistence is the caller's decision,
//! so the same pipeline serves the HTTP upload path and the CLI.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::analysis::StoredAnalysis;
use crate::classify;
use crate::extract::{ExtractionError, PdfTextExtractor};
use crate::llm::parser::{parse_analysis, ParseError};
use crate::llm::prompts::{build_prompt, truncate_utf8};
use crate::llm::{LlmClient, LlmError};
use crate::models::Category;

/// Errors surfaced by the analysis pipeline. All of them are
/// per-request: the caller reports them and moves on.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Outcome of analyzing one uploaded document.
#[derive(Debug)]
pub struct DocumentAnalysis {
    /// Page count reported by the extractor.
    pub pages: u32,
    /// Leading slice of the extracted text, bounded by `preview_chars`.
    pub text_preview: String,
    /// Category the document was classified into.
    pub detected_type: Category,
    /// Full analysis object as the model returned it.
    pub analysis: Value,
    /// Projection of the analysis onto the stored columns.
    pub stored: StoredAnalysis,
}

/// Runs the upload analysis pipeline.
pub struct DocumentAnalyzer {
    extractor: PdfTextExtractor,
    llm: LlmClient,
    contract_detection: bool,
    preview_chars: usize,
}

impl DocumentAnalyzer {
    pub fn new(llm: LlmClient, contract_detection: bool, preview_chars: usize) -> Self {
        Self {
            extractor: PdfTextExtractor::new(),
            llm,
            contract_detection,
            preview_chars,
        }
    }

    /// Analyze one PDF upload.
    pub async fn analyze(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<DocumentAnalysis, AnalyzeError> {
        let extracted = self.extractor.extract(bytes)?;

        let detected_type = classify::classify(&extracted.text, self.contract_detection);
        info!(
            filename,
            pages = extracted.page_count,
            category = %detected_type,
            "analyzing document"
        );

        let prompt = build_prompt(
            detected_type,
            &extracted.text,
            self.llm.config().max_excerpt_chars,
        );
        let raw = self.llm.generate(&prompt).await?;
        let analysis = parse_analysis(&raw)?;
        let stored = StoredAnalysis::from_value(detected_type, &analysis);

        Ok(DocumentAnalysis {
            pages: extracted.page_count,
            text_preview: truncate_utf8(&extracted.text, self.preview_chars).to_string(),
            detected_type,
            analysis,
            stored,
        })
    }
}
