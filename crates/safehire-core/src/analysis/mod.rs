//! Message analysis: the oracle round trip and reply interpretation.

pub mod analyzer;
pub mod model;
pub mod parser;

pub use analyzer::Analyzer;
pub use model::{AnalysisRequest, AnalysisResponse, ScoreReading, Verdict};
pub use parser::{
    bullet_points, classify_risk, extract_risk_score, extract_section, interpret,
    DEFAULT_BULLET_LIMIT, DETAIL_BULLET_LIMIT,
};
