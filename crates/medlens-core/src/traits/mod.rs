//! Core traits for medlens providers.

mod llm;

pub use llm::*;
