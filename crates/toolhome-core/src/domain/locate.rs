//! Types for locating an executable on an agent's search path.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::path::AgentPath;

/// Unit of work shipped to an agent: find `executable_name` on a search path.
///
/// When `search_path` is `None` the agent reads its own live `PATH` at the
/// moment the job runs; nothing is cached between jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LocateJob {
    pub executable_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_path: Option<String>,
}

impl LocateJob {
    pub fn new(executable_name: impl Into<String>) -> Self {
        Self {
            executable_name: executable_name.into(),
            search_path: None,
        }
    }

    /// Search this path instead of the agent's `PATH`.
    #[must_use]
    pub fn with_search_path(mut self, search_path: impl Into<String>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }
}

/// A single candidate checked during the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// The path that was checked, in the agent's syntax.
    pub candidate: String,
    /// The outcome of checking this candidate.
    pub outcome: AttemptOutcome,
}

/// Possible outcomes when checking if a candidate path is a valid executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// File was found and is executable.
    Ok,
    /// Path does not exist.
    NotFound,
    /// Path exists but is not a regular file (e.g., directory).
    NotAFile,
    /// File exists but has no execute bit for anyone.
    NotExecutable,
    /// Permission denied when checking the path.
    PermissionDenied,
    /// Other I/O error occurred.
    IoError(String),
}

impl AttemptOutcome {
    /// Whether the candidate exists in some form, i.e. a near miss worth reporting.
    pub const fn is_partial_match(&self) -> bool {
        matches!(
            self,
            Self::NotAFile | Self::NotExecutable | Self::PermissionDenied | Self::IoError(_)
        )
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "not found"),
            Self::NotAFile => write!(f, "not a file"),
            Self::NotExecutable => write!(f, "not executable"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

/// No acceptable candidate exists on the search path.
///
/// `search_path` is the exact string that was scanned, byte for byte,
/// including empty or duplicated entries. This error crosses the agent
/// boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[error("executable '{executable_name}' not found on search path \"{search_path}\"")]
pub struct ExecutableNotFound {
    pub executable_name: String,
    pub search_path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attempts: Vec<Attempt>,
}

impl ExecutableNotFound {
    pub fn new(executable_name: impl Into<String>, search_path: impl Into<String>) -> Self {
        Self {
            executable_name: executable_name.into(),
            search_path: search_path.into(),
            attempts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attempts(mut self, attempts: Vec<Attempt>) -> Self {
        self.attempts = attempts;
        self
    }

    /// Candidates that exist but were rejected.
    pub fn partial_matches(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().filter(|a| a.outcome.is_partial_match())
    }

    /// Multi-line list of every candidate checked, for operators.
    pub fn attempts_report(&self) -> String {
        if self.attempts.is_empty() {
            return "  (no candidates checked)".to_string();
        }
        self.attempts
            .iter()
            .map(|a| format!("  ✗ {}: {}", a.candidate, a.outcome))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolHomeResolution {
    /// The executable that was found.
    pub executable: AgentPath,
    /// Directory containing the executable.
    pub base_directory: AgentPath,
    /// Configured offset, `None` meaning ".".
    pub relative_offset: Option<String>,
    /// The tool home: `base_directory`, or `base_directory` joined with the offset.
    pub home: AgentPath,
}
