//! Factory for creating LLM providers.

use std::sync::Arc;

use medlens_core::error::MedlensResult;
use medlens_core::traits::{Llm, LlmConfig};

use crate::groq::GroqLlm;

/// Factory for creating LLM providers.
pub struct LlmFactory;

impl LlmFactory {
    /// Create a Groq provider from the given configuration.
    pub fn groq(config: LlmConfig) -> MedlensResult<Arc<dyn Llm>> {
        let llm = GroqLlm::new(config)?;
        Ok(Arc::new(llm))
    }

    /// Create a Groq provider with default configuration.
    pub fn groq_default() -> MedlensResult<Arc<dyn Llm>> {
        Self::groq(LlmConfig::default())
    }

    /// Create a Groq provider with a specific model.
    pub fn groq_with_model(model: impl Into<String>) -> MedlensResult<Arc<dyn Llm>> {
        Self::groq(LlmConfig {
            model: model.into(),
            ..Default::default()
        })
    }
}
