//! Analysis domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SafeHireError, SafeHireResult};

/// Score at or above which a message lands in the scam tier.
pub const SCAM_THRESHOLD: u8 = 70;

/// Score at or above which a message lands in the suspicious tier.
pub const SUSPICIOUS_THRESHOLD: u8 = 40;

/// Three-way severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Legitimate,
    Suspicious,
    Scam,
}

impl Verdict {
    /// Match a free-text verdict label, ignoring case and surrounding punctuation.
    pub fn from_label(label: &str) -> Option<Self> {
        let word = label
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_ascii_lowercase();
        match word.as_str() {
            "legitimate" => Some(Verdict::Legitimate),
            "suspicious" => Some(Verdict::Suspicious),
            "scam" => Some(Verdict::Scam),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Legitimate => "Legitimate",
            Verdict::Suspicious => "Suspicious",
            Verdict::Scam => "Scam",
        }
    }

    /// Banner headline shown for the tier.
    pub fn banner(self) -> &'static str {
        match self {
            Verdict::Scam => "UNSAFE - SCAM DETECTED",
            Verdict::Suspicious => "CAUTION - SUSPICIOUS",
            Verdict::Legitimate => "SAFE - LIKELY LEGITIMATE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the risk score was read from the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "raw", rename_all = "snake_case")]
pub enum ScoreReading {
    /// A score within 0..=100.
    Found(u8),
    /// No line starts with the `Risk Score` label.
    Missing,
    /// The label line carries no digits.
    NoDigits,
    /// The concatenated digits exceed 100, e.g. `"7100"` from `7/100`.
    OutOfRange(String),
}

impl ScoreReading {
    /// The usable score, 0 for every failed reading.
    pub fn value(&self) -> u8 {
        match self {
            ScoreReading::Found(score) => *score,
            _ => 0,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ScoreReading::Found(_))
    }
}

/// One message to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub message: String,
}

impl AnalysisRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reject blank messages before any oracle call.
    pub fn validate(&self) -> SafeHireResult<()> {
        if self.message.trim().is_empty() {
            return Err(SafeHireError::EmptyMessage);
        }
        Ok(())
    }
}

/// Structured view of an oracle reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub risk_score: u8,
    pub score_reading: ScoreReading,
    /// Locally derived tier; may disagree with `reported_verdict`.
    pub tier: Verdict,
    /// The oracle's own verdict text, verbatim apart from trimming.
    pub verdict_label: String,
    pub reported_verdict: Option<Verdict>,
    pub evidence: Vec<String>,
    pub scam_signals: Vec<String>,
    pub advice: Vec<String>,
    pub raw_reply: String,
}

impl AnalysisResponse {
    /// Interpret a raw oracle reply. Never fails.
    pub fn from_reply(reply: &str) -> Self {
        super::parser::interpret(reply)
    }

    /// Whether the oracle's verdict is recognized and differs from the score tier.
    pub fn verdict_mismatch(&self) -> bool {
        self.reported_verdict.is_some_and(|v| v != self.tier)
    }
}
