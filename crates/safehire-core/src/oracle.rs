//! The oracle seam: an opaque text-completion service.
//!
//! Implementations are constructed once at startup and injected into the
//! [`Analyzer`](crate::analysis::Analyzer). The call is made exactly once per
//! request; there is no retry.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single oracle call.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("could not reach the model service: {0}")]
    Transport(String),

    #[error("model service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("the model refused the message ({0})")]
    Blocked(String),

    #[error("the model returned no text")]
    EmptyReply,

    #[error("unreadable model response: {0}")]
    InvalidResponse(String),

    #[error("could not build the model client: {0}")]
    Client(String),
}

/// A text-completion oracle taking an instruction and a user message.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Short identifier used in logs, e.g. the model name.
    fn name(&self) -> &str;

    /// Send the instruction and message, returning the raw reply text.
    async fn complete(&self, instruction: &str, message: &str) -> Result<String, OracleError>;
}
