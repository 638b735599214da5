//! Agent worker command handler.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::BufReader;

/// Serve the agent protocol on this process's stdin/stdout until EOF.
pub async fn execute(root_dir: &Path) -> Result<()> {
    toolhome_runtime::serve_agent(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        root_dir,
    )
    .await
    .map_err(crate::error::CliError::from)
    .with_context(|| format!("agent worker for '{}' stopped", root_dir.display()))
}
