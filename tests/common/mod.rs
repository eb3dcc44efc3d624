//! Shared testing utilities for update-cask CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const CASK_PATH: &str = "Casks/ai-review.rb";

/// Testing harness providing an isolated tap directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated tap directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Root of the emulated tap checkout.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled binary with release inputs cleared.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("update-cask").expect("Failed to locate update-cask binary");
        cmd.current_dir(self.work_dir())
            .env_remove("VERSION")
            .env_remove("SHA_ARM")
            .env_remove("SHA_INTEL");
        cmd
    }

    /// Command with all dual-architecture inputs set.
    pub fn release_cli(&self, version: &str, arm: &str, intel: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("VERSION", version).env("SHA_ARM", arm).env("SHA_INTEL", intel);
        cmd
    }

    pub fn cask_path(&self) -> PathBuf {
        self.work_dir().join(CASK_PATH)
    }

    pub fn read_cask(&self) -> Option<String> {
        fs::read_to_string(self.cask_path()).ok()
    }

    pub fn write_cask(&self, content: &str) {
        let path = self.cask_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Assert that no cask file was produced.
    pub fn assert_cask_not_exists(&self) {
        assert!(!self.cask_path().exists(), "cask file should not exist");
    }
}
