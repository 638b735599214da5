//! Agent reached through a child process speaking the agent protocol.

use async_trait::async_trait;
use std::process::Stdio;
use std::sync::OnceLock;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use toolhome_core::{AgentPath, AgentPort, DiagnosticSink, DispatchError, LocateJob, PathStyle};
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::protocol::{AgentReply, AgentRequest};

/// Agent behind a command such as `ssh build-01 toolhome agent`.
///
/// Every request spawns the command afresh and sends exactly one request
/// line. The child is killed when the request future is dropped, so an
/// abandoned wait leaves no worker behind.
#[derive(Debug)]
pub struct CommandAgent {
    name: String,
    program: String,
    args: Vec<String>,
    // Learned from the first successful probe
    style: OnceLock<PathStyle>,
}

impl CommandAgent {
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
            style: OnceLock::new(),
        }
    }

    /// Split a whitespace-separated command line; the whole line becomes the name.
    ///
    /// No shell quoting is interpreted.
    pub fn parse(command_line: &str) -> Result<Self, AgentError> {
        let mut words = command_line.split_whitespace().map(ToString::to_string);
        let program = words.next().ok_or(AgentError::EmptyCommand)?;
        Ok(Self::new(command_line.trim(), program, words.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Send one request and wait for its final reply, forwarding log lines to `sink`.
    async fn exchange(
        &self,
        request: &AgentRequest,
        sink: &dyn DiagnosticSink,
    ) -> Result<AgentReply, AgentError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AgentError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AgentError::UnexpectedReply("agent stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AgentError::UnexpectedReply("agent stdout unavailable".to_string()))?;

        let mut line = serde_json::to_vec(request)?;
        line.push(b'\n');
        stdin.write_all(&line).await?;
        stdin.flush().await?;
        // EOF tells the worker there is nothing else to serve
        drop(stdin);

        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<AgentReply>(trimmed)? {
                AgentReply::Log { line } => sink.line(&line),
                reply => {
                    debug!(agent = %self.name, ?reply, "Agent replied");
                    return Ok(reply);
                }
            }
        }

        Err(AgentError::NoReply)
    }
}

#[async_trait]
impl AgentPort for CommandAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn root_path(&self) -> Option<AgentPath> {
        match self.exchange(&AgentRequest::Probe, &toolhome_core::NoopSink).await {
            Ok(AgentReply::Root { path, style }) => {
                let style = *self.style.get_or_init(|| style);
                Some(AgentPath::new(path, style))
            }
            Ok(AgentReply::Error { message }) => {
                warn!(agent = %self.name, %message, "Agent refused probe");
                None
            }
            Ok(other) => {
                warn!(agent = %self.name, reply = ?other, "Unexpected probe reply");
                None
            }
            Err(e) => {
                warn!(agent = %self.name, error = %e, "Agent unreachable");
                None
            }
        }
    }

    async fn run(&self, job: LocateJob, sink: &dyn DiagnosticSink) -> Result<String, DispatchError> {
        match self.exchange(&AgentRequest::Locate(job), sink).await {
            Ok(AgentReply::Located { path }) => Ok(path),
            Ok(AgentReply::NotFound(not_found)) => Err(DispatchError::NotFound(not_found)),
            Ok(AgentReply::Error { message }) => Err(DispatchError::Remote(message)),
            Ok(other) => Err(DispatchError::Transport(
                AgentError::UnexpectedReply(format!("{other:?}")).to_string(),
            )),
            Err(e) => Err(DispatchError::Transport(e.to_string())),
        }
    }

    fn create_path(&self, absolute: &str) -> Option<AgentPath> {
        // Without a probe there is no way to know the agent's path syntax
        self.style
            .get()
            .map(|style| AgentPath::new(absolute, *style))
    }
}
