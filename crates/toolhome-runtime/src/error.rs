//! Agent transport errors.

use std::io;
use thiserror::Error;

/// Failure talking to, or acting as, an agent worker.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent command is empty")]
    EmptyCommand,

    #[error("failed to spawn agent command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("agent I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed agent message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("agent closed its output without a reply")]
    NoReply,

    #[error("unexpected reply from agent: {0}")]
    UnexpectedReply(String),
}
