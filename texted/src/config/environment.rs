//! Environment variable handling for configuration overrides.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides `max_path`.
pub const MAX_PATH_VAR: &str = "TEXTED_MAX_PATH";
/// Overrides `scratch_path`.
pub const SCRATCH_PATH_VAR: &str = "TEXTED_SCRATCH_PATH";
/// Overrides `backup_suffix`.
pub const BACKUP_SUFFIX_VAR: &str = "TEXTED_BACKUP_SUFFIX";

/// Handles `TEXTED_*` environment variable overrides.
///
/// # Examples
///
/// ```no_run
/// use texted::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `TEXTED_MAX_PATH` is not a positive integer.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(MAX_PATH_VAR) {
            let max_path = value.trim().parse().map_err(|_| Error::Validation {
                field: MAX_PATH_VAR.into(),
                message: "Must be a positive integer".into(),
            })?;
            config.max_path = Some(max_path);
        }

        if let Some(value) = env::var_os(SCRATCH_PATH_VAR) {
            config.scratch_path = Some(PathBuf::from(value));
        }

        if let Ok(value) = env::var(BACKUP_SUFFIX_VAR) {
            config.backup_suffix = Some(value);
        }

        Ok(())
    }
}
