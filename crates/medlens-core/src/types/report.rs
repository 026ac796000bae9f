//! Result types returned to the transport layer.

use serde::{Deserialize, Serialize};

/// Terminal artifact of the analysis pipeline.
///
/// `original_document` always equals the extracted text the analysis was
/// produced from, byte for byte. Serializes to the
/// `{originalDocument, analysis}` shape expected at the result boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The extracted report text the analysis was produced from.
    #[serde(rename = "originalDocument")]
    pub original_document: String,

    /// Patient-friendly narrative analysis, or a canned message when the
    /// content gate rejected the document.
    pub analysis: String,
}

impl AnalysisResult {
    /// Create a new analysis result.
    pub fn new(original_document: impl Into<String>, analysis: impl Into<String>) -> Self {
        Self {
            original_document: original_document.into(),
            analysis: analysis.into(),
        }
    }
}

/// Error record returned at the result boundary on fatal failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create an error response from any displayable error.
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
