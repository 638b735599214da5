//! CLI-specific error types and mappings.
//!
//! Each failure kind gets its own exit code so scripts can tell an
//! unreachable agent from a tool that simply is not installed.

use thiserror::Error;
use toolhome_core::{ExecutableNotFound, ResolveError};
use toolhome_runtime::AgentError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The agent could not be reached.
    #[error("agent unavailable: {0}")]
    AgentUnavailable(String),

    /// The executable is not on the agent's search path.
    #[error("not found: {0}")]
    NotFound(ExecutableNotFound),

    /// Internal inconsistency.
    #[error("internal error: {0}")]
    Internal(String),

    /// Interrupted before the agent answered.
    #[error("cancelled: {0}")]
    Cancelled(String),

    /// IO or transport error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Codes follow sysexits.h where one fits; a missing executable uses the
    /// shell's "command not found" and cancellation uses 128 + SIGINT.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,         // EX_USAGE
            Self::AgentUnavailable(_) => 69, // EX_UNAVAILABLE
            Self::Internal(_) => 70,         // EX_SOFTWARE
            Self::Io(_) => 74,               // EX_IOERR
            Self::Config(_) => 78,           // EX_CONFIG
            Self::NotFound(_) => 127,
            Self::Cancelled(_) => 130,
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Configuration(msg) => Self::Config(msg),
            ResolveError::AgentUnavailable { agent } => {
                Self::AgentUnavailable(format!("'{agent}' has no reachable root directory"))
            }
            ResolveError::NotFound(not_found) => Self::NotFound(not_found),
            ResolveError::IllegalState(msg) => Self::Internal(msg),
            err @ ResolveError::Cancelled { .. } => Self::Cancelled(err.to_string()),
            err @ ResolveError::Dispatch { .. } => Self::Io(err.to_string()),
        }
    }
}

impl From<ExecutableNotFound> for CliError {
    fn from(err: ExecutableNotFound) -> Self {
        Self::NotFound(err)
    }
}

impl From<AgentError> for CliError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::EmptyCommand => Self::Arguments(err.to_string()),
            other => Self::Io(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
