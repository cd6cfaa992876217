//! Assertion helpers for scenario tests.
//!
//! Failure messages list the project tree to aid debugging.

use std::path::Path;

use super::TestProject;

/// List all files in a directory recursively, sorted
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file exists relative to the project root.
#[track_caller]
pub fn assert_file(project: &TestProject, relative: &str) {
    assert!(
        project.path(relative).exists(),
        "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
        relative,
        list_all_files(project.root()).join("\n  ")
    );
}

/// Assert that no file exists relative to the project root.
#[track_caller]
pub fn assert_no_file(project: &TestProject, relative: &str) {
    assert!(
        !project.path(relative).exists(),
        "Expected no file at '{}', but it exists.",
        relative
    );
}
