//! Configuration system for medlens.

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalyzerConfig;
use crate::error::{MedlensError, MedlensResult};
use crate::traits::LlmConfig;

/// Default Groq production model from the reference deployment.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Top-level configuration: provider settings plus pipeline settings.
///
/// Credentials and model name are owned by the caller and passed in;
/// nothing in the core reads the environment except the explicit
/// [`MedlensConfig::from_env`] constructor used at process bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MedlensConfig {
    /// LLM provider configuration.
    pub llm: LlmConfig,
    /// Analysis pipeline configuration.
    pub analyzer: AnalyzerConfig,
}

impl Default for MedlensConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: DEFAULT_MODEL.to_string(),
                ..Default::default()
            },
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl MedlensConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MedlensResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| MedlensError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| MedlensError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| MedlensError::Configuration(e.to_string())),
            _ => Err(MedlensError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            config.llm.api_key = Some(api_key);
        }
        if let Ok(model) = std::env::var("MEDLENS_LLM_MODEL") {
            config.llm.model = model;
        }
        if let Ok(base_url) = std::env::var("MEDLENS_LLM_BASE_URL") {
            config.llm.base_url = Some(base_url);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_deployment() {
        let config = MedlensConfig::default();
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.analyzer.generation.temperature, Some(0.7));
        assert_eq!(config.analyzer.generation.max_tokens, Some(1024));
    }

    #[test]
    fn test_toml_overrides_merge_with_defaults() {
        let config: MedlensConfig = toml::from_str(
            r#"
            [llm]
            model = "llama-3.1-8b-instant"

            [analyzer.gate]
            keywords = ["radiology", "biopsy"]
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.analyzer.gate.keywords, vec!["radiology", "biopsy"]);
        // Untouched sections keep their defaults.
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.analyzer.retry.max_retries, 2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = MedlensConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MedlensConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.llm.model, config.llm.model);
        assert_eq!(back.analyzer.gate.keywords, config.analyzer.gate.keywords);
    }
}
