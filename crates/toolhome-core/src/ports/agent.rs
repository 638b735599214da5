//! Execution context port.
//!
//! An agent is the host where the search actually has to happen: the
//! controller's own `PATH` and filesystem say nothing about the machine
//! that will run the tool. Implementations range from an in-process call
//! to a child process speaking JSON over stdio (possibly through `ssh`).

use async_trait::async_trait;
use thiserror::Error;

use super::DiagnosticSink;
use crate::domain::{AgentPath, ExecutableNotFound, LocateJob};

/// Failure of a dispatched locate job.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The search ran and found nothing. Carried through unchanged.
    #[error(transparent)]
    NotFound(#[from] ExecutableNotFound),

    /// The job could not be delivered or its reply could not be read.
    #[error("agent transport failed: {0}")]
    Transport(String),

    /// The agent received the job but failed while running it.
    #[error("agent reported an error: {0}")]
    Remote(String),
}

/// Port for running a locate job in an agent's context.
#[async_trait]
pub trait AgentPort: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// The agent's root directory, or `None` when the agent is offline.
    async fn root_path(&self) -> Option<AgentPath>;

    /// Run `job` on the agent and return the absolute path it found, in the
    /// agent's own syntax.
    ///
    /// Progress lines produced on the agent side are forwarded to `sink`.
    /// Dropping the returned future abandons the job.
    async fn run(&self, job: LocateJob, sink: &dyn DiagnosticSink) -> Result<String, DispatchError>;

    /// Translate an absolute path string reported by the agent into an
    /// [`AgentPath`]. Returns `None` when the agent can no longer interpret
    /// paths (for instance it went offline after the probe).
    fn create_path(&self, absolute: &str) -> Option<AgentPath>;
}
