//! Lookups against real directories created under a temp dir.

use tempfile::TempDir;
use toolhome_core::{AttemptOutcome, LocateJob, PathStyle};
use toolhome_locator::{FsProvider, PathExecutableLocator, SystemFs};

#[cfg(unix)]
fn write_file(dir: &std::path::Path, name: &str, mode: u32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
    path
}

fn join_search_path(dirs: &[&std::path::Path]) -> String {
    let sep = PathStyle::native().list_separator().to_string();
    dirs.iter()
        .map(|d| d.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(&sep)
}

#[cfg(unix)]
#[test]
fn test_finds_executable_in_second_directory() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let expected = write_file(second.path(), "widget", 0o755);

    let search_path = join_search_path(&[first.path(), second.path()]);
    let found = PathExecutableLocator::system()
        .locate_in("widget", &search_path)
        .unwrap();

    assert_eq!(found, expected.to_string_lossy());
}

#[cfg(unix)]
#[test]
fn test_file_without_execute_bit_is_skipped() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_file(first.path(), "widget", 0o644);
    let expected = write_file(second.path(), "widget", 0o700);

    let search_path = join_search_path(&[first.path(), second.path()]);
    let found = PathExecutableLocator::system()
        .locate_in("widget", &search_path)
        .unwrap();

    assert_eq!(found, expected.to_string_lossy());
}

#[cfg(unix)]
#[test]
fn test_any_execute_bit_is_enough() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "widget", 0o641);

    assert_eq!(SystemFs.check_executable(&path), AttemptOutcome::Ok);
}

#[cfg(unix)]
#[test]
fn test_symlink_to_executable_is_accepted() {
    let target_dir = TempDir::new().unwrap();
    let link_dir = TempDir::new().unwrap();
    let target = write_file(target_dir.path(), "real-widget", 0o755);
    std::os::unix::fs::symlink(&target, link_dir.path().join("widget")).unwrap();

    let found = PathExecutableLocator::system()
        .locate_in("widget", &link_dir.path().to_string_lossy())
        .unwrap();

    // The link itself is reported, not its target
    assert_eq!(found, link_dir.path().join("widget").to_string_lossy());
}

#[test]
fn test_directory_with_executable_name_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("widget")).unwrap();

    assert_eq!(
        SystemFs.check_executable(&dir.path().join("widget")),
        AttemptOutcome::NotAFile
    );
}

#[test]
fn test_missing_executable_reports_search_path_verbatim() {
    let dir = TempDir::new().unwrap();
    let search_path = format!(
        "{}{sep}{sep}{}",
        dir.path().display(),
        dir.path().display(),
        sep = PathStyle::native().list_separator()
    );

    let err = PathExecutableLocator::system()
        .run_job(&LocateJob::new("toolhome-no-such-tool").with_search_path(search_path.clone()))
        .unwrap_err();

    assert_eq!(err.executable_name, "toolhome-no-such-tool");
    assert_eq!(err.search_path, search_path);
    assert!(err.partial_matches().next().is_none());
}

#[test]
fn test_absolute_makes_relative_candidates_absolute() {
    let absolute = SystemFs.absolute("bin/widget");
    assert!(PathStyle::native().is_absolute(&absolute));
    assert!(absolute.ends_with("widget"));
}
