//! Subcommands and their arguments.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a tool's home directory on an agent
    Resolve(ResolveArgs),

    /// Print the absolute path of an executable found on this host's PATH
    Locate {
        /// Executable to look for, e.g. "git"
        executable_name: String,
        /// Search this path instead of PATH
        #[arg(long, env = "TOOLHOME_SEARCH_PATH")]
        search_path: Option<String>,
    },

    /// Serve agent requests on stdin/stdout until EOF
    Agent {
        /// Directory reported as the agent root
        #[arg(long, env = "TOOLHOME_ROOT_DIR", default_value = ".")]
        root_dir: PathBuf,
    },
}

/// Arguments of `toolhome resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Executable to look for, e.g. "git"
    pub executable_name: String,

    /// Path appended to the executable's directory, e.g. ".."
    #[arg(long, env = "TOOLHOME_RELATIVE_PATH")]
    pub relative_path: Option<String>,

    /// Search this path on the agent instead of the agent's PATH
    #[arg(long, env = "TOOLHOME_SEARCH_PATH")]
    pub search_path: Option<String>,

    /// Name of this installer configuration, used in logs
    #[arg(long, env = "TOOLHOME_LABEL", default_value = "default")]
    pub label: String,

    /// Print agent progress lines to stderr
    #[arg(long)]
    pub progress: bool,

    #[command(flatten)]
    pub agent: AgentArgs,
}

/// Which agent a command runs against.
#[derive(Args, Debug, Clone)]
pub struct AgentArgs {
    /// Command that starts a remote agent worker, e.g. "ssh build-01 toolhome agent".
    /// Without it the search runs on this host.
    #[arg(long, env = "TOOLHOME_AGENT_COMMAND")]
    pub agent_command: Option<String>,

    /// Root directory of the local agent
    #[arg(long, env = "TOOLHOME_ROOT_DIR", default_value = ".")]
    pub root_dir: PathBuf,
}
