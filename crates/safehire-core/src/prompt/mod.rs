//! Instruction template construction.
//!
//! The instruction sent alongside every message is built once at startup.
//! Only the embedded date varies between processes; everything else comes
//! from [`PromptOptions`].

pub mod model;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{SafeHireError, SafeHireResult};
pub use model::{Section, TimelinePolicy};

/// Options shaping the instruction template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    pub persona: String,
    pub timeline: TimelinePolicy,
    pub evaluation_factors: Vec<String>,
    pub sections: Vec<Section>,
    pub future_dates_not_suspicious: bool,
    pub forbid_section_changes: bool,
    pub require_numeric_score: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            persona: "SafeHire AI".to_string(),
            timeline: TimelinePolicy::default(),
            evaluation_factors: vec![
                "domains".to_string(),
                "payment requests".to_string(),
                "company presence".to_string(),
                "urgency".to_string(),
                "process realism".to_string(),
            ],
            sections: Section::ALL.to_vec(),
            future_dates_not_suspicious: true,
            forbid_section_changes: true,
            require_numeric_score: true,
        }
    }
}

impl PromptOptions {
    pub fn validate(&self) -> SafeHireResult<()> {
        if !self.timeline.is_ordered() {
            return Err(SafeHireError::invalid_config(format!(
                "prompt.timeline.normal_months ({}) must be below acceptable_months ({})",
                self.timeline.normal_months, self.timeline.acceptable_months
            )));
        }
        if self.sections.is_empty() {
            return Err(SafeHireError::invalid_config("prompt.sections must not be empty"));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section) {
                return Err(SafeHireError::invalid_config(format!(
                    "prompt.sections lists '{}' twice",
                    section.label()
                )));
            }
        }
        Ok(())
    }
}

/// The finished instruction, immutable for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTemplate {
    text: String,
    built_on: NaiveDate,
}

impl InstructionTemplate {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn built_on(&self) -> NaiveDate {
        self.built_on
    }
}

impl fmt::Display for InstructionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds the instruction template from [`PromptOptions`].
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    options: PromptOptions,
}

impl PromptBuilder {
    pub fn new(options: PromptOptions) -> Self {
        Self { options }
    }

    /// Build the instruction grounded on today's local date.
    pub fn build_now(&self) -> InstructionTemplate {
        self.build(chrono::Local::now().date_naive())
    }

    /// Build the instruction grounded on `today`.
    pub fn build(&self, today: NaiveDate) -> InstructionTemplate {
        let opts = &self.options;
        let mut text = String::new();

        text.push_str(&format!(
            "You are {}, an AI system for detecting internship and job scams.\n\n",
            opts.persona
        ));
        text.push_str(&format!("Today's date is {}.\n\n", today.format("%B %d, %Y")));
        text.push_str(
            "Your task is to analyze job or internship messages using real-world hiring practices.\n\n",
        );

        text.push_str("Rules:\n");
        if opts.future_dates_not_suspicious {
            text.push_str("- Future dates alone are NOT suspicious.\n");
        }
        text.push_str("- Hiring timelines:\n");
        text.push_str(&opts.timeline.render());
        text.push('\n');
        if !opts.evaluation_factors.is_empty() {
            text.push_str(&format!(
                "- Evaluate {}.\n",
                join_with_and(&opts.evaluation_factors)
            ));
        }

        text.push_str("\nYou MUST respond in the EXACT format below:\n\n");
        let schema: Vec<String> = opts.sections.iter().map(|s| s.schema()).collect();
        text.push_str(&schema.join("\n"));
        text.push_str("\n\n");

        if opts.forbid_section_changes {
            text.push_str("Do not add, remove, or reorder sections.\n");
        }
        if opts.require_numeric_score && opts.sections.contains(&Section::RiskScore) {
            text.push_str("Always include a numeric Risk Score, even when unsure.\n");
        }

        InstructionTemplate {
            text,
            built_on: today,
        }
    }
}

/// Join items as an English list: "a, b, and c".
fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} and {}", a, b),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_default_prompt_content() {
        let template = PromptBuilder::default().build(date());
        let text = template.as_str();

        assert!(text.starts_with("You are SafeHire AI, an AI system"));
        assert!(text.contains("Today's date is October 18, 2026."));
        assert!(text.contains("- Future dates alone are NOT suspicious."));
        assert!(text.contains("0–18 months → normal"));
        assert!(text.contains(">24 months → suspicious"));
        assert!(text.contains(
            "- Evaluate domains, payment requests, company presence, urgency, and process realism."
        ));
        assert!(text.contains("Do not add, remove, or reorder sections."));
        assert!(text.contains("Always include a numeric Risk Score"));
        assert_eq!(template.built_on(), date());
    }

    #[test]
    fn test_sections_in_schema_order() {
        let text = PromptBuilder::default().build(date()).to_string();
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| text.find(s.header()).expect("section header present"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(text.contains("Risk Score: <number from 0 to 100>\nVerdict: <Legitimate | Suspicious | Scam>\nEvidence:\n- <point>"));
    }

    #[test]
    fn test_strictness_flags_off() {
        let options = PromptOptions {
            future_dates_not_suspicious: false,
            forbid_section_changes: false,
            require_numeric_score: false,
            ..PromptOptions::default()
        };
        let text = PromptBuilder::new(options).build(date()).to_string();
        assert!(!text.contains("Future dates"));
        assert!(!text.contains("reorder"));
        assert!(!text.contains("Always include"));
    }

    #[test]
    fn test_custom_timeline() {
        let options = PromptOptions {
            timeline: TimelinePolicy {
                normal_months: 6,
                acceptable_months: 12,
            },
            ..PromptOptions::default()
        };
        let text = PromptBuilder::new(options).build(date()).to_string();
        assert!(text.contains("0–6 months → normal"));
        assert!(text.contains(">12 months → suspicious"));
    }

    #[test]
    fn test_validate_rejects_duplicate_sections() {
        let options = PromptOptions {
            sections: vec![Section::RiskScore, Section::Advice, Section::RiskScore],
            ..PromptOptions::default()
        };
        assert!(options.validate().is_err());
        assert!(PromptOptions::default().validate().is_ok());
    }

    #[test]
    fn test_join_with_and() {
        assert_eq!(join_with_and(&["urgency".to_string()]), "urgency");
        assert_eq!(
            join_with_and(&["a".to_string(), "b".to_string()]),
            "a and b"
        );
    }
}
