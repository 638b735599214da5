//! Filesystem provider trait for testable path resolution.

use std::io::ErrorKind;
use std::path::Path;
use toolhome_core::AttemptOutcome;

/// Trait for filesystem operations (injectable for testing).
pub trait FsProvider: Send + Sync {
    /// Check if a path exists and is an acceptable executable.
    /// Returns `Ok` if so, or the reason it was rejected otherwise.
    fn check_executable(&self, path: &Path) -> AttemptOutcome;

    /// Make a candidate found through a relative search path entry absolute.
    fn absolute(&self, candidate: &str) -> String;
}

/// Production filesystem provider that uses real filesystem operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        // metadata() follows symlinks, so a link to an executable is accepted
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return AttemptOutcome::NotFound;
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return AttemptOutcome::PermissionDenied;
            }
            Err(e) => return AttemptOutcome::IoError(e.to_string()),
        };

        if !metadata.is_file() {
            return AttemptOutcome::NotAFile;
        }

        // Windows has no execute bit: extension matching already happened
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o111 == 0 {
                return AttemptOutcome::NotExecutable;
            }
        }

        AttemptOutcome::Ok
    }

    fn absolute(&self, candidate: &str) -> String {
        std::path::absolute(candidate).map_or_else(
            |_| candidate.to_string(),
            |path| path.to_string_lossy().into_owned(),
        )
    }
}

/// Test/mock filesystem provider with predefined responses.
#[cfg(test)]
#[derive(Default)]
pub struct MockFs {
    executables: std::collections::HashSet<std::path::PathBuf>,
    non_executables: std::collections::HashSet<std::path::PathBuf>,
    directories: std::collections::HashSet<std::path::PathBuf>,
    checked: std::sync::Mutex<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_non_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.non_executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_directory(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.directories.insert(path.into());
        self
    }

    /// Every path passed to `check_executable`, in order.
    pub fn checked(&self) -> Vec<std::path::PathBuf> {
        self.checked.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl FsProvider for MockFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        self.checked.lock().unwrap().push(path.to_path_buf());
        if self.executables.contains(path) {
            AttemptOutcome::Ok
        } else if self.non_executables.contains(path) {
            AttemptOutcome::NotExecutable
        } else if self.directories.contains(path) {
            AttemptOutcome::NotAFile
        } else {
            AttemptOutcome::NotFound
        }
    }

    fn absolute(&self, candidate: &str) -> String {
        format!("/cwd/{candidate}")
    }
}
