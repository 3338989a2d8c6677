//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

/// Whether `command` can be spawned from the current `PATH`.
///
/// Tests that depend on `gofmt` or `goimports` use this to skip themselves
/// on machines without a Go toolchain.
pub fn command_available(command: &str) -> bool {
    Command::new(command)
        .arg("-h")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Assert that two strings are equal, with a line diff on failure.
///
/// Whitespace matters in generated Go, so the diff shows tabs as `→`.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.split('\n').collect();
        let actual_lines: Vec<&str> = actual.split('\n').collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp.replace('\t', "→")));
                diff.push_str(&format!("  actual:   {}\n", act.replace('\t', "→")));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_temp_file(name: impl AsRef<Path>, contents: &str) -> io::Result<tempfile::TempDir> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join(name), contents)?;
    Ok(dir)
}
