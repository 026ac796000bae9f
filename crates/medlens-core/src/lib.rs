//! medlens-core - Core library for medlens.
//!
//! This crate provides the types, traits, and analysis pipeline for
//! turning extracted medical-report text into a patient-friendly
//! narrative via an LLM completion provider.
//!
//! # Example
//!
//! ```ignore
//! use medlens_core::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new(llm, AnalyzerConfig::default());
//!
//! // Gate, prompt, provider call, result assembly.
//! let result = analyzer.analyze(&extracted_text).await?;
//! println!("{}", result.analysis);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gate;
pub mod prompt;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use analyzer::{Analyzer, AnalyzerConfig, RetryConfig, FALLBACK_ANALYSIS, GATE_REJECTION_MESSAGE};
pub use config::{MedlensConfig, DEFAULT_MODEL};
pub use error::{MedlensError, MedlensResult};
pub use gate::{ContentGate, GateConfig, GateDecision};
pub use prompt::{AnalysisPrompt, PromptBuilder, PromptTemplates};
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
pub use types::{AnalysisResult, ErrorResponse, Message, MessageRole};
