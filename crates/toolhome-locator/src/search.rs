//! Search path splitting and per-platform candidate checks.

use std::path::Path;
use toolhome_core::{AgentPath, Attempt, AttemptOutcome, PathStyle};
use tracing::trace;

use super::env::EnvProvider;
use super::fs::FsProvider;

/// Executable extensions tried on Windows when `PATHEXT` is unset or empty.
pub const DEFAULT_EXECUTABLE_EXTENSIONS: [&str; 4] = [".COM", ".EXE", ".BAT", ".CMD"];

/// An ordered list of directories, as written in a `PATH`-style variable.
#[derive(Debug, Clone, Copy)]
pub struct SearchPath<'a> {
    raw: &'a str,
    style: PathStyle,
}

impl<'a> SearchPath<'a> {
    pub const fn new(raw: &'a str, style: PathStyle) -> Self {
        Self { raw, style }
    }

    /// The string exactly as given.
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Directories in search order. Empty entries are dropped; on Windows
    /// surrounding double quotes are removed.
    pub fn directories(&self) -> impl Iterator<Item = &'a str> + 'a {
        let style = self.style;
        self.raw
            .split(style.list_separator())
            .map(move |entry| match style {
                PathStyle::Windows => entry.trim_matches('"'),
                PathStyle::Posix => entry,
            })
            .filter(|entry| !entry.is_empty())
    }
}

/// Extensions that mark a file as executable on Windows, in lookup order.
pub fn executable_extensions(env: &dyn EnvProvider) -> Vec<String> {
    let from_env: Vec<String> = env
        .get("PATHEXT")
        .map(|value| {
            value
                .to_string_lossy()
                .split(';')
                .map(str::trim)
                .filter(|ext| !ext.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();

    if from_env.is_empty() {
        DEFAULT_EXECUTABLE_EXTENSIONS
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        from_env
    }
}

/// Scans a search path for one executable name.
pub struct PathSearcher<'a> {
    env: &'a dyn EnvProvider,
    fs: &'a dyn FsProvider,
    style: PathStyle,
}

impl<'a> PathSearcher<'a> {
    pub fn new(env: &'a dyn EnvProvider, fs: &'a dyn FsProvider, style: PathStyle) -> Self {
        Self { env, fs, style }
    }

    /// File names to try inside each directory.
    ///
    /// POSIX tries the bare name. Windows tries the bare name only if it
    /// already ends with a known extension, otherwise one name per extension.
    pub fn candidate_names(&self, name: &str) -> Vec<String> {
        match self.style {
            PathStyle::Posix => vec![name.to_string()],
            PathStyle::Windows => {
                let extensions = executable_extensions(self.env);
                let lowered = name.to_ascii_lowercase();
                if extensions
                    .iter()
                    .any(|ext| lowered.ends_with(&ext.to_ascii_lowercase()))
                {
                    vec![name.to_string()]
                } else {
                    extensions.iter().map(|ext| format!("{name}{ext}")).collect()
                }
            }
        }
    }

    /// Check candidates in search order, stopping at the first acceptable one.
    ///
    /// The returned attempts end with the accepted candidate, if any.
    pub fn search(&self, name: &str, search_path: SearchPath<'_>) -> Vec<Attempt> {
        let names = self.candidate_names(name);
        let mut attempts = Vec::new();

        for dir in search_path.directories() {
            let dir = AgentPath::new(dir, self.style);
            for candidate_name in &names {
                let candidate = dir.child(candidate_name).as_str().to_string();
                let outcome = self.fs.check_executable(Path::new(&candidate));
                trace!(candidate = %candidate, outcome = %outcome, "Checked candidate");

                let accepted = outcome == AttemptOutcome::Ok;
                attempts.push(Attempt { candidate, outcome });
                if accepted {
                    return attempts; // Early return on first success
                }
            }
        }

        attempts
    }
}
