//! The executable locator: a locate job evaluated on the current host.

use toolhome_core::{AttemptOutcome, DiagnosticSink, ExecutableNotFound, LocateJob, PathStyle};
use tracing::debug;

use super::env::{EnvProvider, SystemEnv};
use super::fs::{FsProvider, SystemFs};
use super::search::{PathSearcher, SearchPath};

/// Finds an executable on a search path, first match wins.
///
/// The environment and filesystem are injected so tests can substitute
/// both without touching the real process state. [`Self::system`] wires the
/// live ones.
pub struct PathExecutableLocator<'a> {
    env: &'a dyn EnvProvider,
    fs: &'a dyn FsProvider,
    style: PathStyle,
    sink: Option<&'a dyn DiagnosticSink>,
}

impl PathExecutableLocator<'static> {
    /// Locator over the live process environment and filesystem.
    pub fn system() -> Self {
        Self::new(&SystemEnv, &SystemFs)
    }
}

impl<'a> PathExecutableLocator<'a> {
    /// Locator with injected dependencies, using this host's path style.
    pub fn new(env: &'a dyn EnvProvider, fs: &'a dyn FsProvider) -> Self {
        Self {
            env,
            fs,
            style: PathStyle::native(),
            sink: None,
        }
    }

    /// Apply another platform's lookup rules.
    #[must_use]
    pub const fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Report skipped near misses to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The current search path: the live `PATH` value, or "" when unset.
    ///
    /// Read on every call so a changed `PATH` is seen by the next lookup.
    pub fn search_path(&self) -> String {
        self.env
            .get("PATH")
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Locate `executable_name` on the current search path.
    pub fn locate(&self, executable_name: &str) -> Result<String, ExecutableNotFound> {
        let search_path = self.search_path();
        self.locate_in(executable_name, &search_path)
    }

    /// Run a shipped job: its own search path if it has one, `PATH` otherwise.
    pub fn run_job(&self, job: &LocateJob) -> Result<String, ExecutableNotFound> {
        match job.search_path.as_deref() {
            Some(search_path) => self.locate_in(&job.executable_name, search_path),
            None => self.locate(&job.executable_name),
        }
    }

    /// Locate `executable_name` on an explicit search path.
    ///
    /// Returns the absolute path of the first acceptable candidate. On
    /// failure the error carries `search_path` exactly as given.
    pub fn locate_in(
        &self,
        executable_name: &str,
        search_path: &str,
    ) -> Result<String, ExecutableNotFound> {
        if executable_name.trim().is_empty() {
            return Err(ExecutableNotFound::new(executable_name, search_path));
        }

        let searcher = PathSearcher::new(self.env, self.fs, self.style);
        let mut attempts =
            searcher.search(executable_name, SearchPath::new(search_path, self.style));

        if attempts
            .last()
            .is_some_and(|a| a.outcome == AttemptOutcome::Ok)
        {
            let found = attempts.pop().map(|a| a.candidate).unwrap_or_default();
            self.report_near_misses(&attempts);
            let absolute = if self.style.is_absolute(&found) {
                found
            } else {
                self.fs.absolute(&found)
            };
            debug!(executable = executable_name, path = %absolute, "Located executable");
            return Ok(absolute);
        }

        self.report_near_misses(&attempts);
        debug!(
            executable = executable_name,
            search_path,
            candidates = attempts.len(),
            "Executable not on search path"
        );
        Err(ExecutableNotFound::new(executable_name, search_path).with_attempts(attempts))
    }

    fn report_near_misses(&self, attempts: &[toolhome_core::Attempt]) {
        let Some(sink) = self.sink else {
            return;
        };
        for attempt in attempts.iter().filter(|a| a.outcome.is_partial_match()) {
            sink.line(&format!("Skipping {}: {}", attempt.candidate, attempt.outcome));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;
    use crate::fs::MockFs;
    use std::path::PathBuf;
    use toolhome_core::BufferedSink;

    #[test]
    fn test_locate_finds_executable_in_later_directory() {
        let env = MockEnv::new().with_var("PATH", "/usr/bin:/usr/local/bin");
        let fs = MockFs::new().with_executable("/usr/local/bin/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        assert_eq!(locator.locate("widget").unwrap(), "/usr/local/bin/widget");
    }

    #[test]
    fn test_first_directory_in_path_order_wins() {
        let env = MockEnv::new().with_var("PATH", "/opt/b:/opt/a");
        let fs = MockFs::new()
            .with_executable("/opt/a/widget")
            .with_executable("/opt/b/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        assert_eq!(locator.locate("widget").unwrap(), "/opt/b/widget");
    }

    #[test]
    fn test_empty_search_path_reports_empty_string() {
        let env = MockEnv::new().with_var("PATH", "");
        let fs = MockFs::new();

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);
        let err = locator.locate("ghost").unwrap_err();

        assert_eq!(err.executable_name, "ghost");
        assert_eq!(err.search_path, "");
        assert!(err.attempts.is_empty());
    }

    #[test]
    fn test_unset_path_is_treated_as_empty() {
        let env = MockEnv::new();
        let fs = MockFs::new();

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        assert_eq!(locator.locate("ghost").unwrap_err().search_path, "");
    }

    #[test]
    fn test_not_found_keeps_malformed_search_path_verbatim() {
        let raw = "/usr/bin::/usr/bin:";
        let env = MockEnv::new().with_var("PATH", raw);
        let fs = MockFs::new();

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);
        let err = locator.locate("ghost").unwrap_err();

        assert_eq!(err.search_path, raw);
        assert_eq!(err.attempts.len(), 2);
    }

    #[test]
    fn test_non_executable_file_is_skipped_not_accepted() {
        let env = MockEnv::new().with_var("PATH", "/first:/second");
        let fs = MockFs::new()
            .with_non_executable("/first/widget")
            .with_executable("/second/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        assert_eq!(locator.locate("widget").unwrap(), "/second/widget");
    }

    #[test]
    fn test_only_non_executable_candidate_fails() {
        let env = MockEnv::new().with_var("PATH", "/first");
        let fs = MockFs::new().with_non_executable("/first/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);
        let err = locator.locate("widget").unwrap_err();

        assert_eq!(err.partial_matches().count(), 1);
    }

    #[test]
    fn test_directory_named_like_executable_is_skipped() {
        let env = MockEnv::new().with_var("PATH", "/first:/second");
        let fs = MockFs::new()
            .with_directory("/first/widget")
            .with_executable("/second/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        assert_eq!(locator.locate("widget").unwrap(), "/second/widget");
    }

    #[test]
    fn test_blank_name_is_rejected_without_filesystem_access() {
        let env = MockEnv::new().with_var("PATH", "/usr/bin");
        let fs = MockFs::new();

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);
        let err = locator.locate("  ").unwrap_err();

        assert_eq!(err.search_path, "/usr/bin");
        assert!(fs.checked().is_empty());
    }

    #[test]
    fn test_relative_entry_is_made_absolute() {
        let env = MockEnv::new().with_var("PATH", "bin");
        let fs = MockFs::new().with_executable("bin/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        assert_eq!(locator.locate("widget").unwrap(), "/cwd/bin/widget");
    }

    #[test]
    fn test_job_search_path_overrides_env() {
        let env = MockEnv::new().with_var("PATH", "/usr/bin");
        let fs = MockFs::new()
            .with_executable("/usr/bin/widget")
            .with_executable("/custom/widget");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Posix);

        let job = LocateJob::new("widget").with_search_path("/custom");
        assert_eq!(locator.run_job(&job).unwrap(), "/custom/widget");
        assert_eq!(
            locator.run_job(&LocateJob::new("widget")).unwrap(),
            "/usr/bin/widget"
        );
    }

    #[test]
    fn test_windows_extensions_are_tried_in_order() {
        let env = MockEnv::new().with_var("PATH", r"C:\Windows;C:\tools");
        let fs = MockFs::new()
            .with_executable(r"C:\tools\widget.BAT")
            .with_executable(r"C:\tools\widget.CMD");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Windows);

        assert_eq!(locator.locate("widget").unwrap(), r"C:\tools\widget.BAT");
        let checked = fs.checked();
        assert_eq!(checked.len(), 7);
        assert_eq!(checked[0], PathBuf::from(r"C:\Windows\widget.COM"));
    }

    #[test]
    fn test_windows_name_with_extension_is_tested_bare() {
        let env = MockEnv::new()
            .with_var("PATH", r"C:\tools")
            .with_var("PATHEXT", ".EXE;.CMD");
        let fs = MockFs::new().with_executable(r"C:\tools\widget.exe");

        let locator = PathExecutableLocator::new(&env, &fs).with_style(PathStyle::Windows);

        assert_eq!(locator.locate("widget.exe").unwrap(), r"C:\tools\widget.exe");
        assert_eq!(fs.checked(), vec![PathBuf::from(r"C:\tools\widget.exe")]);
    }

    #[test]
    fn test_sink_hears_about_near_misses() {
        let env = MockEnv::new().with_var("PATH", "/first:/second");
        let fs = MockFs::new()
            .with_non_executable("/first/widget")
            .with_executable("/second/widget");
        let sink = BufferedSink::new();

        PathExecutableLocator::new(&env, &fs)
            .with_style(PathStyle::Posix)
            .with_sink(&sink)
            .locate("widget")
            .unwrap();

        assert_eq!(sink.take(), vec!["Skipping /first/widget: not executable"]);
    }
}
