//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Check every field that is set.
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - `max_path` is below 2 (no room for even a one-byte path)
    /// - `scratch_path` is empty
    /// - `backup_suffix` is empty or contains a `/`
    ///
    /// # Examples
    ///
    /// ```
    /// use texted::config::{Config, ConfigValidator};
    ///
    /// assert!(ConfigValidator::validate(&Config::default()).is_ok());
    ///
    /// let bad = Config { max_path: Some(1), ..Default::default() };
    /// assert!(ConfigValidator::validate(&bad).is_err());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(max_path) = config.max_path {
            if max_path < 2 {
                return Err(Error::Validation {
                    field: "max_path".into(),
                    message: format!("must be at least 2, got {max_path}"),
                });
            }
        }

        if let Some(scratch) = &config.scratch_path {
            if scratch.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "scratch_path".into(),
                    message: "must not be empty".into(),
                });
            }
        }

        if let Some(suffix) = &config.backup_suffix {
            if suffix.is_empty() {
                return Err(Error::Validation {
                    field: "backup_suffix".into(),
                    message: "must not be empty".into(),
                });
            }
            if suffix.contains('/') {
                return Err(Error::Validation {
                    field: "backup_suffix".into(),
                    message: "must not contain '/'".into(),
                });
            }
        }

        Ok(())
    }
}
