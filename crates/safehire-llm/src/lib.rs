//! # SafeHire LLM
//!
//! Oracle implementations backed by hosted model APIs.

pub mod gemini;

pub use gemini::GeminiClient;
