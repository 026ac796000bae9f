//! medlens-extractors - Document text extraction for report intake.
//!
//! Converts an uploaded document's bytes into plain text behind a
//! trait-based adapter interface. Ships a PDF adapter; images are
//! recognized media types without an adapter (no OCR path).
//!
//! # Example
//!
//! ```ignore
//! use medlens_extractors::{ExtractionPipeline, ExtractorFactory};
//!
//! // Use pipeline for MIME type routing
//! let pipeline = ExtractionPipeline::with_defaults();
//! let text = pipeline.extract(&pdf_bytes, "application/pdf").await?;
//!
//! // Or construct the adapter directly
//! let pdf = ExtractorFactory::pdf();
//! let text = pdf.extract(&pdf_bytes).await?;
//! ```

mod error;
mod factory;
mod pdf;
mod pipeline;
mod types;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use pdf::PdfExtractor;
pub use pipeline::ExtractionPipeline;
pub use types::{ExtractedText, MediaType, SourceDocument};

use async_trait::async_trait;

/// Core Extractor trait - all extraction adapters implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from document bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedText>;

    /// Supported MIME types for this extractor.
    fn supported_types(&self) -> &[&str];

    /// Check if this extractor handles the given MIME type.
    fn supports(&self, mime_type: &str) -> bool {
        self.supported_types().contains(&mime_type)
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
