//! Prompt schema models.

use serde::{Deserialize, Serialize};

/// One of the labeled blocks the oracle is told to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    RiskScore,
    Verdict,
    Evidence,
    ScamSignals,
    Advice,
}

impl Section {
    /// All sections in schema order.
    pub const ALL: [Section; 5] = [
        Section::RiskScore,
        Section::Verdict,
        Section::Evidence,
        Section::ScamSignals,
        Section::Advice,
    ];

    /// The label as it appears at the start of a reply line.
    pub fn label(self) -> &'static str {
        match self {
            Section::RiskScore => "Risk Score",
            Section::Verdict => "Verdict",
            Section::Evidence => "Evidence",
            Section::ScamSignals => "Scam Signals",
            Section::Advice => "Advice",
        }
    }

    /// The header token, label plus colon.
    pub fn header(self) -> &'static str {
        match self {
            Section::RiskScore => "Risk Score:",
            Section::Verdict => "Verdict:",
            Section::Evidence => "Evidence:",
            Section::ScamSignals => "Scam Signals:",
            Section::Advice => "Advice:",
        }
    }

    /// Render the schema lines for this section.
    pub fn schema(self) -> String {
        match self {
            Section::RiskScore => "Risk Score: <number from 0 to 100>".to_string(),
            Section::Verdict => "Verdict: <Legitimate | Suspicious | Scam>".to_string(),
            list => format!("{}\n- <point>\n- <point>", list.header()),
        }
    }
}

/// Hiring-timeline heuristic, in months between message and start date.
///
/// `0..=normal_months` is normal, up to `acceptable_months` is acceptable,
/// anything beyond is suspicious.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePolicy {
    pub normal_months: u32,
    pub acceptable_months: u32,
}

impl Default for TimelinePolicy {
    fn default() -> Self {
        Self {
            normal_months: 18,
            acceptable_months: 24,
        }
    }
}

impl TimelinePolicy {
    pub fn is_ordered(&self) -> bool {
        self.normal_months < self.acceptable_months
    }

    /// Render the three timeline bands as indented rule lines.
    pub fn render(&self) -> String {
        format!(
            "  • 0–{n} months → normal\n  • {n}–{a} months → acceptable\n  • >{a} months → suspicious",
            n = self.normal_months,
            a = self.acceptable_months
        )
    }
}
