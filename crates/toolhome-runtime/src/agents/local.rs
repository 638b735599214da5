//! The current host as an agent.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::task::JoinError;
use toolhome_core::{
    AgentPath, AgentPort, BufferedSink, DiagnosticSink, DispatchError, ExecutableNotFound,
    LocateJob, PathStyle,
};
use toolhome_locator::PathExecutableLocator;
use tracing::debug;

/// Agent that runs the search in this process.
///
/// It is reachable while `root_dir` exists and is a directory.
#[derive(Debug, Clone)]
pub struct LocalAgent {
    name: String,
    root_dir: PathBuf,
}

impl LocalAgent {
    pub fn new(name: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root_dir: root_dir.into(),
        }
    }
}

#[async_trait]
impl AgentPort for LocalAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn root_path(&self) -> Option<AgentPath> {
        probe_root(&self.root_dir)
            .await
            .map(|root| AgentPath::new(root, PathStyle::native()))
    }

    async fn run(&self, job: LocateJob, sink: &dyn DiagnosticSink) -> Result<String, DispatchError> {
        let (result, lines) = locate_blocking(job)
            .await
            .map_err(|e| DispatchError::Remote(format!("locator task failed: {e}")))?;
        for line in lines {
            sink.line(&line);
        }
        Ok(result?)
    }

    fn create_path(&self, absolute: &str) -> Option<AgentPath> {
        Some(AgentPath::new(absolute, PathStyle::native()))
    }
}

/// Absolute form of `dir` if it is an existing directory.
pub(crate) async fn probe_root(dir: &Path) -> Option<String> {
    match tokio::fs::metadata(dir).await {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            debug!(root = %dir.display(), "Agent root is not a directory");
            return None;
        }
        Err(e) => {
            debug!(root = %dir.display(), error = %e, "Agent root is not reachable");
            return None;
        }
    }

    let absolute = std::path::absolute(dir).ok()?;
    Some(absolute.to_string_lossy().into_owned())
}

/// Run a locate job against the live environment on a blocking thread.
///
/// Returns the locator's result together with the progress lines it
/// produced, in order.
pub(crate) async fn locate_blocking(
    job: LocateJob,
) -> Result<(Result<String, ExecutableNotFound>, Vec<String>), JoinError> {
    tokio::task::spawn_blocking(move || {
        let sink = BufferedSink::new();
        let result = PathExecutableLocator::system()
            .with_sink(&sink)
            .run_job(&job);
        (result, sink.take())
    })
    .await
}
