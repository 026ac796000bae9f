//! Factory for creating extractors.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{ExtractError, ExtractResult};
use crate::types::MediaType;
use crate::{Extractor, PdfExtractor};

/// Factory for creating document extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a PDF extractor.
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    /// Create a PDF extractor with an extraction time budget.
    pub fn pdf_with_timeout(timeout: Duration) -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::with_timeout(timeout))
    }

    /// Create an extractor for a declared media type.
    ///
    /// Fails with `UnsupportedType` before any extractor is constructed
    /// for types without an adapter (image OCR is not implemented).
    pub fn for_media_type(media_type: MediaType) -> ExtractResult<Arc<dyn Extractor>> {
        match media_type {
            MediaType::Pdf => Ok(Self::pdf()),
            MediaType::Jpeg | MediaType::Png => {
                Err(ExtractError::UnsupportedType(media_type.as_mime().into()))
            }
        }
    }

    /// Create an extractor for a MIME type string.
    pub fn for_mime_type(mime_type: &str) -> ExtractResult<Arc<dyn Extractor>> {
        match MediaType::from_mime(mime_type) {
            Some(media_type) => Self::for_media_type(media_type),
            None => Err(ExtractError::UnsupportedType(mime_type.to_string())),
        }
    }

    /// Get all available extractors.
    pub fn all() -> Vec<Arc<dyn Extractor>> {
        vec![Self::pdf()]
    }
}
