//! Prompt construction for the report analysis call.
//!
//! The instructions are data, not logic: both the system persona and the
//! user-side report skeleton live in [`PromptTemplates`] so they can be
//! revised (or loaded from configuration) without touching orchestration
//! code. The extracted report text is embedded verbatim into the user
//! instruction; there is no silent truncation - over-budget reports are
//! rejected with a distinct error.

use serde::{Deserialize, Serialize};

use crate::error::{MedlensError, MedlensResult};
use crate::types::Message;

/// Placeholder in the user template replaced by the report text.
const REPORT_PLACEHOLDER: &str = "{report}";

/// System persona, constant across all requests. Version 1.
const SYSTEM_INSTRUCTION: &str = "\
You are a compassionate and knowledgeable medical report interpreter designed to transform complex medical documents into clear, understandable insights. Your goal is to empower patients by:

- Translating medical jargon into simple, accessible language
- Providing a holistic view of the patient's health
- Offering supportive and constructive guidance
- Delivering personalized, actionable health recommendations

Communication Principles:
- Use warm, encouraging language
- Avoid medical intimidation
- Focus on empowerment and positive health strategies
- Provide clear, practical advice
- Maintain a balance between medical accuracy and patient comprehension";

/// Per-document analysis skeleton. Section order is fixed.
const USER_TEMPLATE: &str = "\
Analyze this medical report and create a comprehensive, patient-friendly breakdown:

Medical Report Content:
{report}

Generate a detailed, supportive medical report in the structure below. Use clear, simple language. Bold all significant findings, values, and recommendations to make them stand out. Keep the tone informative, encouraging, and non-alarming.

Personalized Greeting

Address the patient by name

Mention the purpose of the report

Report Overview

Specify the type of medical test/report

Mention the key health areas examined

Briefly explain the importance of the test

Simplified Medical Explanation

Break down complex medical terms

Explain each major finding in plain language

Use analogies or comparisons where helpful

Bold all key findings or terms (e.g., High LDL Cholesterol)

Health Status Assessment

Highlight positive/healthy results

Identify and explain any concerning values

Compare results to standard healthy ranges and bold actual values

Potential Health Implications

Discuss possible reasons for abnormal results

Explain potential short-term and long-term effects

Provide context without causing alarm

Personalized Improvement Recommendations

Suggest specific diet changes

Recommend tailored exercises

Propose lifestyle changes based on findings

Include stress management techniques if relevant

Keep all suggestions practical and patient-specific

Tone: Supportive and empowering
Goal: Help the patient clearly understand their health and how to improve it
Style: Plain, clear, and concise with important elements in bold";

fn default_max_report_chars() -> usize {
    120_000
}

/// Prompt templates plus the report length budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplates {
    /// System persona sent with every request.
    pub system_instruction: String,
    /// User instruction template; must contain a `{report}` placeholder.
    pub user_template: String,
    /// Maximum report length in characters; 0 disables the check.
    pub max_report_chars: usize,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_template: USER_TEMPLATE.to_string(),
            max_report_chars: default_max_report_chars(),
        }
    }
}

/// A rendered prompt pair for a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    /// Constant per-deployment system instruction.
    pub system_instruction: String,
    /// Per-document user instruction embedding the full report text.
    pub user_instruction: String,
}

impl AnalysisPrompt {
    /// Convert into the message list sent to the provider.
    pub fn into_messages(self) -> Vec<Message> {
        vec![
            Message::system(self.system_instruction),
            Message::user(self.user_instruction),
        ]
    }
}

/// Renders analysis prompts from templates.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    templates: PromptTemplates,
}

impl PromptBuilder {
    /// Create a builder from templates.
    pub fn new(templates: PromptTemplates) -> Self {
        Self { templates }
    }

    /// Build the prompt for a report, embedding the text verbatim.
    ///
    /// A template without the report placeholder would silently send a
    /// reportless prompt, so it is rejected as a configuration error.
    pub fn build(&self, text: &str) -> MedlensResult<AnalysisPrompt> {
        if !self.templates.user_template.contains(REPORT_PLACEHOLDER) {
            return Err(MedlensError::Configuration(format!(
                "user template is missing the {} placeholder",
                REPORT_PLACEHOLDER
            )));
        }

        let max = self.templates.max_report_chars;
        if max > 0 {
            let len = text.chars().count();
            if len > max {
                return Err(MedlensError::ReportTooLarge { len, max });
            }
        }

        Ok(AnalysisPrompt {
            system_instruction: self.templates.system_instruction.clone(),
            user_instruction: self
                .templates
                .user_template
                .replace(REPORT_PLACEHOLDER, text),
        })
    }
}
