//! Wire messages exchanged with an agent worker.
//!
//! Line-delimited JSON: one request per line in, any number of `log`
//! replies followed by exactly one final reply out.

use serde::{Deserialize, Serialize};
use toolhome_core::{ExecutableNotFound, LocateJob, PathStyle};

/// Request sent to an agent worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentRequest {
    /// Reachability probe; answered with [`AgentReply::Root`].
    Probe,
    /// Run the locator.
    Locate(LocateJob),
}

/// Reply from an agent worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentReply {
    /// Root directory of the agent and the path syntax it uses.
    Root { path: String, style: PathStyle },
    /// A progress line produced while a request runs.
    Log { line: String },
    /// The executable was found at `path`.
    Located { path: String },
    /// The search ran and found nothing.
    NotFound(ExecutableNotFound),
    /// The request could not be served.
    Error { message: String },
}

impl AgentReply {
    /// Whether this reply ends the exchange for its request.
    pub const fn is_final(&self) -> bool {
        !matches!(self, Self::Log { .. })
    }
}
