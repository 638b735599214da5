//! CLI bootstrap - the composition root.
//!
//! Picks the agent adapter from the command-line arguments and wires it into
//! a [`ToolHomeService`] together with the progress sink and the
//! cancellation token shared with the Ctrl-C handler.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use toolhome_core::{AgentPort, DiagnosticSink, ToolHomeService, TracingSink, fix_empty};
use toolhome_runtime::{CommandAgent, LocalAgent};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::AgentArgs;
use crate::error::CliError;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Sink that prints progress lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn line(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Fully composed context for the `resolve` command.
pub struct CliContext {
    pub service: ToolHomeService,
    pub cancel: CancellationToken,
}

impl CliContext {
    /// Cancel the context's token on the first Ctrl-C.
    pub fn cancel_on_ctrl_c(&self) {
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Interrupt received, cancelling");
                cancel.cancel();
            }
        });
    }
}

/// Build the agent named by `args`: a command agent when a command is given,
/// this host otherwise.
pub fn build_agent(args: &AgentArgs) -> Result<Arc<dyn AgentPort>, CliError> {
    match fix_empty(args.agent_command.as_deref()) {
        Some(command_line) => Ok(Arc::new(CommandAgent::parse(&command_line)?)),
        None => Ok(Arc::new(LocalAgent::new("local", args.root_dir.clone()))),
    }
}

/// Where agent progress lines go: stderr with `--progress`, the log with
/// `--verbose`, nowhere otherwise.
pub fn progress_sink(progress: bool, verbose: bool) -> Option<Arc<dyn DiagnosticSink>> {
    if progress {
        Some(Arc::new(StderrSink))
    } else if verbose {
        Some(Arc::new(TracingSink))
    } else {
        None
    }
}

/// Compose the resolve context.
pub fn bootstrap(args: &AgentArgs, progress: bool, verbose: bool) -> Result<CliContext, CliError> {
    let agent = build_agent(args)?;
    debug!(agent = agent.name(), "Bootstrapped agent");

    let mut service = ToolHomeService::new(agent);
    if let Some(sink) = progress_sink(progress, verbose) {
        service = service.with_sink(sink);
    }

    Ok(CliContext {
        service,
        cancel: CancellationToken::new(),
    })
}
