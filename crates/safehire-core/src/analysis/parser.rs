//! Tolerant line-oriented parser for oracle replies.
//!
//! The reply schema is a request, not a guarantee. Every extraction falls
//! back to an empty or zero value instead of failing.

use super::model::{AnalysisResponse, ScoreReading, Verdict, SCAM_THRESHOLD, SUSPICIOUS_THRESHOLD};
use crate::prompt::Section;

/// Bullets shown for signals and advice.
pub const DEFAULT_BULLET_LIMIT: usize = 3;

/// Bullets shown in the detailed evidence panel.
pub const DETAIL_BULLET_LIMIT: usize = 5;

const BULLET_MARKERS: [char; 4] = ['-', '*', '•', '–'];

/// Interpret a full reply into an [`AnalysisResponse`].
pub fn interpret(reply: &str) -> AnalysisResponse {
    let score_reading = read_risk_score(reply);
    let risk_score = score_reading.value();
    let verdict_label = extract_verdict_label(reply);
    let reported_verdict = Verdict::from_label(&verdict_label);

    AnalysisResponse {
        risk_score,
        score_reading,
        tier: classify_risk(risk_score),
        verdict_label,
        reported_verdict,
        evidence: bullet_points(
            &extract_section(reply, Section::Evidence.header()),
            DETAIL_BULLET_LIMIT,
        ),
        scam_signals: bullet_points(
            &extract_section(reply, Section::ScamSignals.header()),
            DEFAULT_BULLET_LIMIT,
        ),
        advice: bullet_points(
            &extract_section(reply, Section::Advice.header()),
            DEFAULT_BULLET_LIMIT,
        ),
        raw_reply: reply.to_string(),
    }
}

/// Read the risk score, reporting why it could not be used.
///
/// The first line starting with `Risk Score` wins. All of its ASCII digits
/// are concatenated, so `Risk Score: 7/100` reads as `7100` and is rejected
/// as out of range rather than clamped.
pub fn read_risk_score(text: &str) -> ScoreReading {
    let label = Section::RiskScore.label();
    let Some(line) = text
        .lines()
        .map(strip_decoration)
        .find(|line| line.starts_with(label))
    else {
        return ScoreReading::Missing;
    };

    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return ScoreReading::NoDigits;
    }

    match digits.parse::<u64>().ok().and_then(|v| u8::try_from(v).ok()) {
        Some(score) if score <= 100 => ScoreReading::Found(score),
        _ => ScoreReading::OutOfRange(digits),
    }
}

/// The risk score, or 0 when it cannot be read.
pub fn extract_risk_score(text: &str) -> u8 {
    read_risk_score(text).value()
}

/// Text following the line that holds `header`, up to the next section header.
///
/// A line starting with `header` is preferred; a mention inside earlier prose
/// is only used when no such line exists. Returns an empty string when the
/// header is absent or sits on the last line.
pub fn extract_section(text: &str, header: &str) -> String {
    let mut lines = text.lines();
    let body = if lines
        .by_ref()
        .any(|line| strip_decoration(line).starts_with(header))
    {
        lines
    } else {
        let Some(start) = text.find(header) else {
            return String::new();
        };
        let after_header = &text[start + header.len()..];
        let Some(newline) = after_header.find('\n') else {
            return String::new();
        };
        after_header[newline + 1..].lines()
    };

    body.take_while(|line| !is_section_header(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Non-blank lines of `text` with one leading bullet marker removed, at most `limit`.
pub fn bullet_points(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(BULLET_MARKERS).unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Map a score to its tier: 70 and up is a scam, 40 and up suspicious.
pub fn classify_risk(score: u8) -> Verdict {
    if score >= SCAM_THRESHOLD {
        Verdict::Scam
    } else if score >= SUSPICIOUS_THRESHOLD {
        Verdict::Suspicious
    } else {
        Verdict::Legitimate
    }
}

/// The oracle's verdict label from the first `Verdict` line.
pub fn extract_verdict_label(text: &str) -> String {
    let label = Section::Verdict.label();
    text.lines()
        .map(strip_decoration)
        .find(|line| line.starts_with(label))
        .map(|line| {
            line[label.len()..]
                .trim_start_matches(|c: char| c == ':' || c == '*' || c.is_whitespace())
                .trim_end_matches('*')
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

/// Leading whitespace and markdown emphasis/heading marks removed.
fn strip_decoration(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(['*', '#'])
        .trim_start()
}

fn is_section_header(line: &str) -> bool {
    let line = strip_decoration(line);
    Section::ALL.iter().any(|s| line.starts_with(s.header()))
}
