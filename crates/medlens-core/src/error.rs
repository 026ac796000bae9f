//! Error types for medlens operations.

use thiserror::Error;

/// Result type alias for medlens operations.
pub type MedlensResult<T> = Result<T, MedlensError>;

/// Main error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum MedlensError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider rejected the credentials.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Provider rate limit exceeded.
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// Network-level failure reaching the provider (connect, send, timeout, 5xx).
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Provider returned an unusable or invalid response.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Report text exceeds the configured prompt budget.
    #[error("Report too large: {len} characters (limit {max})")]
    ReportTooLarge { len: usize, max: usize },

    /// Normalized analysis failure. The underlying cause is preserved as
    /// the error source for logging but never appears in the display text,
    /// so provider internals are not leaked to callers.
    #[error("Failed to analyze medical report")]
    AnalysisFailed {
        #[source]
        source: Box<MedlensError>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MedlensError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with a preserved cause.
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an LLM error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a provider failure into the single normalized analysis error.
    pub fn analysis_failed(cause: MedlensError) -> Self {
        Self::AnalysisFailed {
            source: Box::new(cause),
        }
    }

    /// Whether a retry could plausibly succeed. Rate limits and network
    /// failures are transient; authentication and validation failures
    /// are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimit(_) | Self::Network { .. })
    }

    /// Map a provider HTTP status into the error taxonomy.
    pub fn from_provider_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Authentication(body.to_string()),
            429 => Self::RateLimit(body.to_string()),
            500..=599 => Self::network(format!("provider returned {}: {}", status, body)),
            _ => Self::llm(format!("provider returned {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(MedlensError::RateLimit("slow down".into()).is_transient());
        assert!(MedlensError::network("connection reset").is_transient());
        assert!(!MedlensError::Authentication("bad key".into()).is_transient());
        assert!(!MedlensError::Configuration("missing model".into()).is_transient());
        assert!(!MedlensError::llm("malformed response").is_transient());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            MedlensError::from_provider_status(401, "invalid key"),
            MedlensError::Authentication(_)
        ));
        assert!(matches!(
            MedlensError::from_provider_status(429, "too many requests"),
            MedlensError::RateLimit(_)
        ));
        assert!(matches!(
            MedlensError::from_provider_status(503, "unavailable"),
            MedlensError::Network { .. }
        ));
        assert!(matches!(
            MedlensError::from_provider_status(400, "bad request"),
            MedlensError::Llm { .. }
        ));
    }

    #[test]
    fn test_analysis_failed_hides_cause() {
        let cause = MedlensError::Authentication("api key 'sk-secret' rejected".into());
        let err = MedlensError::analysis_failed(cause);
        assert_eq!(err.to_string(), "Failed to analyze medical report");
        // Cause remains reachable through the source chain for logging.
        assert!(std::error::Error::source(&err).is_some());
    }
}
