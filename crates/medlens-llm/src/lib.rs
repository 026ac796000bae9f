//! medlens-llm - LLM provider implementations for medlens.
//!
//! Provides concrete completion providers behind the `Llm` trait from
//! medlens-core so the orchestrator never depends on a specific vendor.
//!
//! # Supported Providers
//!
//! - **Groq** - OpenAI-compatible chat completions (llama 3.x family)
//!
//! # Example
//!
//! ```ignore
//! use medlens_llm::LlmFactory;
//!
//! // Create a Groq provider from the environment
//! let llm = LlmFactory::groq_default()?;
//!
//! // Or with a specific model
//! let llm = LlmFactory::groq_with_model("llama-3.1-8b-instant")?;
//! ```

mod factory;
mod groq;

pub use factory::LlmFactory;
pub use groq::GroqLlm;

// Re-export core types for convenience
pub use medlens_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
