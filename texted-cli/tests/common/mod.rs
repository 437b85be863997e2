//! Common test utilities for CLI integration tests.
//!
//! Every [`TestEnv`] gets its own temporary directory that serves as the
//! working directory, `HOME`, the user config directory and the home of the
//! scratch buffer, so tests never touch the real user's files.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `texted` binary.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Directory passed as `--config-dir`
    pub config_dir: PathBuf,
    /// File backing the scratch buffer
    pub scratch_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let config_dir = temp_path.join("config");
        let scratch_path = temp_path.join("scratch.tmp");

        Self {
            temp_dir,
            temp_path,
            config_dir,
            scratch_path,
        }
    }

    /// A bare command with a clean environment but no global flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("texted").expect("Failed to find texted binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("TEXTED_MAX_PATH")
            .env_remove("TEXTED_SCRATCH_PATH")
            .env_remove("TEXTED_BACKUP_SUFFIX")
            .env_remove("TEXTED_CONFIG_DIR")
            .env_remove("TEXTED_LOG_MODE");
        cmd
    }

    /// A command with the config directory and scratch path pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--scratch-path")
            .arg(&self.scratch_path);
        cmd
    }

    /// Absolute path of `name` inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Write `contents` to `name` inside the test directory.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        fs::write(self.config_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Read a file inside the test directory.
    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }

    /// The test directory as a string.
    pub fn dir_str(&self) -> &str {
        self.temp_path.to_str().expect("Temp dir is not UTF-8")
    }
}
