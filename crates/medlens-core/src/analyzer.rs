//! Analysis orchestrator: gate, prompt, provider call, result assembly.

use std::sync::Arc;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MedlensError, MedlensResult};
use crate::gate::{ContentGate, GateConfig};
use crate::prompt::{PromptBuilder, PromptTemplates};
use crate::traits::{GenerationOptions, Llm, LlmResponse};
use crate::types::{AnalysisResult, Message};

/// Canned analysis returned when the content gate rejects a document.
/// A gate rejection is a successful outcome, not an error.
pub const GATE_REJECTION_MESSAGE: &str = "Please provide a proper medical report for analysis.";

/// Substituted when the provider returns a choice with no content.
pub const FALLBACK_ANALYSIS: &str = "Unable to process report";

/// Retry policy for transient provider failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial call.
    pub max_retries: u32,
    /// Initial delay before first retry (milliseconds).
    pub initial_delay_ms: u64,
    /// Maximum delay between retries (milliseconds).
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay_ms: 200,
            max_delay_ms: 5_000,
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// Orchestrator configuration. Generation parameters are configuration,
/// not behavior; they can be adjusted without touching orchestration code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Content gate keywords.
    pub gate: GateConfig,
    /// Prompt templates and report length budget.
    pub prompts: PromptTemplates,
    /// Sampling parameters passed to the provider.
    pub generation: GenerationOptions,
    /// Upper bound on a single provider call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Retry policy for transient provider failures.
    pub retry: RetryConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            gate: GateConfig::default(),
            prompts: PromptTemplates::default(),
            generation: GenerationOptions {
                temperature: Some(0.7),
                max_tokens: Some(1024),
                top_p: None,
            },
            request_timeout_secs: default_request_timeout_secs(),
            retry: RetryConfig::default(),
        }
    }
}

/// Top-level analysis orchestrator.
///
/// Holds a dependency-injected provider so tests can substitute a stub;
/// the provider's lifecycle is owned by the process bootstrap. Every
/// request is processed sequentially with no shared mutable state.
pub struct Analyzer {
    llm: Arc<dyn Llm>,
    gate: ContentGate,
    prompts: PromptBuilder,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the given provider and configuration.
    pub fn new(llm: Arc<dyn Llm>, config: AnalyzerConfig) -> Self {
        Self {
            llm,
            gate: ContentGate::new(config.gate.clone()),
            prompts: PromptBuilder::new(config.prompts.clone()),
            config,
        }
    }

    /// Create an analyzer with default configuration.
    pub fn with_defaults(llm: Arc<dyn Llm>) -> Self {
        Self::new(llm, AnalyzerConfig::default())
    }

    /// Analyze extracted report text.
    ///
    /// Gate rejection short-circuits to a canned result without calling
    /// the provider. Provider failures are normalized into a single
    /// [`MedlensError::AnalysisFailed`] kind; the cause stays on the
    /// error source chain for logging and is never shown to callers.
    pub async fn analyze(&self, text: &str) -> MedlensResult<AnalysisResult> {
        let decision = self.gate.evaluate(text);
        if !decision.passed {
            debug!("content gate rejected document, skipping provider call");
            return Ok(AnalysisResult::new(text, GATE_REJECTION_MESSAGE));
        }
        debug!(matched = ?decision.matched_terms, "content gate passed");

        let messages = self.prompts.build(text)?.into_messages();

        let response = self.complete_with_retry(&messages).await.map_err(|e| {
            warn!(model = self.llm.model_name(), error = %e, "provider call failed");
            MedlensError::analysis_failed(e)
        })?;

        let content = response.content_or_empty();
        let analysis = if content.trim().is_empty() {
            FALLBACK_ANALYSIS.to_string()
        } else {
            content.to_string()
        };

        Ok(AnalysisResult::new(text, analysis))
    }

    /// Single provider call bounded by the request timeout, retried with
    /// exponential backoff while the failure is transient.
    async fn complete_with_retry(&self, messages: &[Message]) -> MedlensResult<LlmResponse> {
        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        let retry = &self.config.retry;

        let call_once = || async {
            let options = Some(self.config.generation.clone());
            match tokio::time::timeout(timeout, self.llm.generate(messages, options)).await {
                Ok(result) => result,
                Err(_) => Err(MedlensError::network(format!(
                    "provider call exceeded {}s timeout",
                    self.config.request_timeout_secs
                ))),
            }
        };

        call_once
            .retry(
                ExponentialBuilder::default()
                    .with_max_times(retry.max_retries as usize)
                    .with_min_delay(Duration::from_millis(retry.initial_delay_ms))
                    .with_max_delay(Duration::from_millis(retry.max_delay_ms)),
            )
            .when(|e: &MedlensError| e.is_transient())
            .notify(|err, dur| {
                warn!("provider call failed, retrying in {:?}: {}", dur, err);
            })
            .await
    }
}
