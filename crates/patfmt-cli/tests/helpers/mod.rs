use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness running the CLI inside an isolated working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("patfmt").expect("Failed to find patfmt binary");

        // Keep the host's configuration out of the tests
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("PATFMT_PATTERN");
        cmd.env_remove("PATFMT_LOCALE");
        cmd.env("PATFMT_TIMEZONE", "UTC");

        cmd
    }

    /// Working directory of this harness
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes a config file into the working directory
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common assertion helpers
pub mod assertions {
    use super::*;

    /// Stdout is exactly `text` followed by a newline
    pub fn prints_line(text: &str) -> impl Predicate<str> {
        predicate::str::diff(format!("{}\n", text))
    }

    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error:")
    }
}
