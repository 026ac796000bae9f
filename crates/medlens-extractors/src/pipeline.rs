//! Extraction pipeline routing intake documents to the right adapter.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedText, SourceDocument};
use crate::Extractor;

/// Pipeline for extracting text using registered extractors.
///
/// Routes a document to the first extractor supporting its declared
/// MIME type; this is the intake-boundary entry point.
pub struct ExtractionPipeline {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionPipeline {
    /// Create new empty pipeline.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create pipeline with all available extractors.
    pub fn with_defaults() -> Self {
        Self {
            extractors: crate::ExtractorFactory::all(),
        }
    }

    /// Add an extractor to the pipeline.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract text using the appropriate extractor for the MIME type.
    ///
    /// An unsupported declared type fails before any parse attempt.
    pub async fn extract(&self, content: &[u8], mime_type: &str) -> ExtractResult<ExtractedText> {
        for extractor in &self.extractors {
            if extractor.supports(mime_type) {
                return extractor.extract(content).await;
            }
        }

        Err(ExtractError::UnsupportedType(mime_type.to_string()))
    }

    /// Extract text from an intake document.
    pub async fn extract_document(&self, document: &SourceDocument) -> ExtractResult<ExtractedText> {
        self.extract(&document.bytes, document.media_type.as_mime())
            .await
    }

    /// Check if pipeline can handle a given MIME type.
    pub fn supports(&self, mime_type: &str) -> bool {
        self.extractors.iter().any(|e| e.supports(mime_type))
    }

    /// List all supported MIME types.
    pub fn supported_types(&self) -> Vec<&str> {
        self.extractors
            .iter()
            .flat_map(|e| e.supported_types().iter().copied())
            .collect()
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
