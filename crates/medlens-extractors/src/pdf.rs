//! PDF text extraction using lopdf.

use std::time::Duration;

use lopdf::Document;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractedText;
use crate::Extractor;
use async_trait::async_trait;

/// Separator between page texts; preserves paragraph boundaries for
/// downstream prompt readability.
const PAGE_SEPARATOR: &str = "\n\n";

/// PDF text extractor.
///
/// Parses the byte buffer as a paginated document, extracts per-page
/// text in physical page order, and joins pages with a blank line.
/// The synchronous parser runs under `spawn_blocking` so it never
/// stalls the async runtime.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    /// Optional time budget for a single extraction.
    timeout: Option<Duration>,
}

impl PdfExtractor {
    /// Create a new PDF extractor with no time budget.
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Create a PDF extractor with an explicit time budget.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Parse and extract synchronously. Page iteration follows the
    /// document's physical page order; no reordering.
    fn extract_sync(content: &[u8]) -> ExtractResult<ExtractedText> {
        let doc = Document::load_mem(content)
            .map_err(|e| ExtractError::CorruptDocument(e.to_string()))?;

        let pages = doc.get_pages();
        if pages.is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        let mut page_texts = Vec::with_capacity(pages.len());
        for (page_number, _object_id) in &pages {
            let text = doc
                .extract_text(&[*page_number])
                .map_err(|e| ExtractError::CorruptDocument(e.to_string()))?;
            page_texts.push(text.trim().to_string());
        }

        let text = page_texts.join(PAGE_SEPARATOR);
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        debug!(
            pages = pages.len(),
            chars = text.len(),
            "extracted text from pdf"
        );
        Ok(ExtractedText::new(text, pages.len()))
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedText> {
        let bytes = content.to_vec();
        let task = tokio::task::spawn_blocking(move || Self::extract_sync(&bytes));

        match self.timeout {
            Some(budget) => match tokio::time::timeout(budget, task).await {
                Ok(joined) => joined?,
                Err(_) => Err(ExtractError::Timeout(budget.as_secs())),
            },
            None => task.await?,
        }
    }

    fn supported_types(&self) -> &[&str] {
        &["application/pdf"]
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
