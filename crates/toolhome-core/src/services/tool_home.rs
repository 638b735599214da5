//! Tool home resolution.
//!
//! Turns an [`InstallerConfig`] into a tool home directory on an agent:
//! validate locally, probe the agent, run the locate job there, then derive
//! the home from the executable's directory and the configured offset.

use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{AgentPath, ExecutableNotFound, InstallerConfig, LocateJob, ToolHomeResolution};
use crate::ports::{AgentPort, DiagnosticSink, DispatchError, NoopSink};

/// Errors that can occur while resolving a tool home.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Required configuration is missing. Raised before the agent is contacted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The agent has no reachable root directory (offline or never connected).
    #[error("agent unavailable: '{agent}' has no reachable root directory")]
    AgentUnavailable { agent: String },

    /// The search ran on the agent and found nothing.
    #[error(transparent)]
    NotFound(ExecutableNotFound),

    /// An invariant was violated; this is a bug, not a user error.
    #[error("internal error: {0}")]
    IllegalState(String),

    /// The caller cancelled while waiting on the agent.
    #[error("cancelled while waiting for agent '{agent}'")]
    Cancelled { agent: String },

    /// The job could not be delivered or the agent failed while running it.
    #[error("dispatch to agent '{agent}' failed: {message}")]
    Dispatch { agent: String, message: String },
}

/// Service that resolves tool homes through an injected agent.
pub struct ToolHomeService {
    agent: Arc<dyn AgentPort>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl ToolHomeService {
    pub fn new(agent: Arc<dyn AgentPort>) -> Self {
        Self { agent, sink: None }
    }

    /// Send progress lines to `sink` as well as to `tracing`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Resolve the tool home for `config`.
    ///
    /// `search_path` replaces the agent's live `PATH` when given. The wait on
    /// the agent is abandoned as soon as `cancel` fires.
    pub async fn resolve(
        &self,
        config: &InstallerConfig,
        search_path: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ToolHomeResolution, ResolveError> {
        let executable_name = config
            .executable_name()
            .ok_or_else(|| ResolveError::Configuration("executable name is empty".to_string()))?;

        let executable = self
            .find_executable(executable_name, search_path, cancel)
            .await?;

        let base_directory = executable.parent().ok_or_else(|| {
            ResolveError::IllegalState(format!(
                "executable ({executable_name}) found at '{executable}' has no parent folder"
            ))
        })?;

        let relative_offset = config.relative_path().map(ToString::to_string);
        let home = match relative_offset.as_deref() {
            None | Some(".") => base_directory.clone(),
            Some(offset) => base_directory.child(offset),
        };

        info!(
            label = config.label(),
            executable = %executable,
            home = %home,
            "Resolved tool home"
        );

        Ok(ToolHomeResolution {
            executable,
            base_directory,
            relative_offset,
            home,
        })
    }

    async fn find_executable(
        &self,
        executable_name: &str,
        search_path: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<AgentPath, ResolveError> {
        let agent = self.agent.as_ref();
        let sink: &dyn DiagnosticSink = self.sink.as_deref().unwrap_or(&NoopSink);

        let root = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(self.cancelled()),
            root = agent.root_path() => root,
        };
        let Some(root) = root else {
            warn!(agent = agent.name(), "Agent is offline");
            return Err(ResolveError::AgentUnavailable {
                agent: agent.name().to_string(),
            });
        };
        debug!(agent = agent.name(), root = %root, "Agent is online");

        let mut job = LocateJob::new(executable_name);
        if let Some(search_path) = search_path {
            job = job.with_search_path(search_path);
        }
        sink.line(&format!(
            "Looking for '{executable_name}' on agent '{}'",
            agent.name()
        ));

        let dispatched = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(self.cancelled()),
            result = agent.run(job, sink) => result,
        };

        let absolute = dispatched.map_err(|err| match err {
            DispatchError::NotFound(not_found) => {
                debug!(
                    executable = %not_found.executable_name,
                    search_path = %not_found.search_path,
                    attempts = ?not_found.attempts,
                    "Executable not found on agent"
                );
                sink.line(&not_found.to_string());
                ResolveError::NotFound(not_found)
            }
            DispatchError::Transport(message) | DispatchError::Remote(message) => {
                ResolveError::Dispatch {
                    agent: agent.name().to_string(),
                    message,
                }
            }
        })?;

        let executable = agent.create_path(&absolute).ok_or_else(|| {
            ResolveError::IllegalState(format!(
                "agent '{}' could not translate '{absolute}' into a path",
                agent.name()
            ))
        })?;
        sink.line(&format!("Found '{executable_name}' at {executable}"));

        Ok(executable)
    }

    fn cancelled(&self) -> ResolveError {
        warn!(agent = self.agent.name(), "Resolution cancelled");
        ResolveError::Cancelled {
            agent: self.agent.name().to_string(),
        }
    }
}
