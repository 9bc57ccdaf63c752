//! SafeHire Core Library
//!
//! Prompt construction, the oracle seam, and tolerant interpretation of
//! the oracle's free-text scam assessment.

pub mod analysis;
pub mod config;
pub mod error;
pub mod oracle;
pub mod prompt;

pub use analysis::{Analyzer, AnalysisRequest, AnalysisResponse, ScoreReading, Verdict};
pub use config::{ApiKey, Settings};
pub use error::{SafeHireError, SafeHireResult};
pub use oracle::{Oracle, OracleError};
pub use prompt::{InstructionTemplate, PromptBuilder, PromptOptions};
