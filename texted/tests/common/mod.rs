//! Common test utilities for integration tests.
//!
//! Environment variables and the working directory are process-global, so
//! tests that use these guards must be marked `#[serial]`.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// RAII guard for setting and restoring an environment variable.
pub struct EnvGuard {
    key: String,
    old_value: Option<OsString>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let old_value = env::var_os(key);
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var_os(key);
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// RAII guard that changes the working directory and changes it back.
pub struct CwdGuard {
    old: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    /// Enter `dir` until the guard is dropped.
    pub fn enter(dir: &Path) -> Self {
        let old = env::current_dir().expect("Failed to read current dir");
        env::set_current_dir(dir).expect("Failed to change directory");
        Self { old }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.old);
    }
}

/// The current directory as a `String`.
#[allow(dead_code)]
pub fn cwd_string() -> String {
    env::current_dir()
        .expect("Failed to read current dir")
        .into_os_string()
        .into_string()
        .expect("Current dir is not UTF-8")
}
