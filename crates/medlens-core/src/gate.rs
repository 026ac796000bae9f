//! Content gate - cheap keyword heuristic deciding whether extracted text
//! is plausibly medical before spending an LLM call on it.
//!
//! This is a pre-filter, not a classifier: false positives and false
//! negatives are expected behavior.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Keyword configuration for the content gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Terms tested by case-insensitive substring containment.
    pub keywords: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "blood",
                "test",
                "diagnosis",
                "report",
                "health",
                "scan",
                "medical",
                "doctor",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Outcome of evaluating a document against the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Whether at least one keyword matched.
    pub passed: bool,
    /// The keywords that matched, lowercased.
    pub matched_terms: BTreeSet<String>,
}

/// Heuristic keyword gate over extracted report text.
#[derive(Debug, Clone, Default)]
pub struct ContentGate {
    config: GateConfig,
}

impl ContentGate {
    /// Create a gate from configuration.
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Evaluate text against the keyword set.
    ///
    /// Pure and deterministic: lowercases the text once and tests each
    /// keyword by substring containment. Empty text never passes.
    pub fn evaluate(&self, text: &str) -> GateDecision {
        let lowered = text.to_lowercase();

        let matched_terms: BTreeSet<String> = self
            .config
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty() && lowered.contains(k.as_str()))
            .collect();

        GateDecision {
            passed: !matched_terms.is_empty(),
            matched_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_fails() {
        let gate = ContentGate::default();
        let decision = gate.evaluate("");
        assert!(!decision.passed);
        assert!(decision.matched_terms.is_empty());
    }

    #[test]
    fn test_medical_text_passes() {
        let gate = ContentGate::default();
        let decision = gate.evaluate("Your blood test results are normal");
        assert!(decision.passed);
        assert!(decision.matched_terms.contains("blood"));
        assert!(decision.matched_terms.contains("test"));
    }

    #[test]
    fn test_non_medical_text_fails() {
        let gate = ContentGate::default();
        let decision = gate.evaluate("The weather today is sunny and warm.");
        assert!(!decision.passed);
    }

    #[test]
    fn test_case_insensitive() {
        let gate = ContentGate::default();
        assert!(gate.evaluate("BLOOD PANEL RESULTS").passed);
        assert!(gate.evaluate("Diagnosis: unremarkable").passed);
    }

    #[test]
    fn test_idempotent_and_order_independent() {
        let text = "Scan results reviewed by the doctor";

        let forward = ContentGate::default().evaluate(text);
        let repeated = ContentGate::default().evaluate(text);
        assert_eq!(forward, repeated);

        let mut reversed_keywords = GateConfig::default().keywords;
        reversed_keywords.reverse();
        let reversed = ContentGate::new(GateConfig {
            keywords: reversed_keywords,
        })
        .evaluate(text);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_custom_keywords() {
        let gate = ContentGate::new(GateConfig {
            keywords: vec!["radiology".to_string()],
        });
        assert!(gate.evaluate("Radiology impression: clear").passed);
        assert!(!gate.evaluate("Your blood test results").passed);
    }
}
