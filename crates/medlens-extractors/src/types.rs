//! Core types for document intake and extraction.

use serde::{Deserialize, Serialize};

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// PDF document.
    Pdf,
    /// JPEG image (recognized but has no extraction adapter).
    Jpeg,
    /// PNG image (recognized but has no extraction adapter).
    Png,
}

impl MediaType {
    /// Parse a MIME type string into a known media type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    /// The canonical MIME type string.
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// An uploaded document as received at the intake boundary.
///
/// Created once per request and discarded after extraction.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Raw document bytes.
    pub bytes: Vec<u8>,
    /// Declared media type.
    pub media_type: MediaType,
}

impl SourceDocument {
    /// Create a source document from bytes and a declared media type.
    pub fn new(bytes: Vec<u8>, media_type: MediaType) -> Self {
        Self { bytes, media_type }
    }
}

/// Plain text extracted from a document.
///
/// Produced once per [`SourceDocument`]; never mutated. Extraction
/// failure is an error, never an empty `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Full text, pages joined with a blank-line separator.
    pub content: String,
    /// Number of pages in the source document.
    pub source_page_count: usize,
}

impl ExtractedText {
    /// Create new extracted text.
    pub fn new(content: String, source_page_count: usize) -> Self {
        Self {
            content,
            source_page_count,
        }
    }
}
