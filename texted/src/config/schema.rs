//! Configuration schema definitions.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::path::{PathResolver, MAX_PATH};

/// Suffix inserted into backup file names unless configured otherwise.
pub const DEFAULT_BACKUP_SUFFIX: &str = "-bkp";

/// File name of the scratch buffer inside the system temp directory.
pub const SCRATCH_FILE_NAME: &str = "texted.tmp";

/// Editor file-handling configuration.
///
/// Every field is optional so that layers can be merged; the accessor
/// methods fill in the defaults.
///
/// # Examples
///
/// ```
/// use texted::config::Config;
///
/// let config = Config {
///     backup_suffix: Some(".orig".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.backup_suffix(), ".orig");
/// assert_eq!(config.max_path(), 4096);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum accepted path length in bytes.
    pub max_path: Option<usize>,

    /// File backing the scratch buffer.
    pub scratch_path: Option<PathBuf>,

    /// Text inserted before the extension of backup copies.
    pub backup_suffix: Option<String>,
}

impl Config {
    /// Maximum path length, defaulting to [`MAX_PATH`].
    #[must_use]
    pub fn max_path(&self) -> usize {
        self.max_path.unwrap_or(MAX_PATH)
    }

    /// Scratch buffer location, defaulting to `texted.tmp` in the temp dir.
    #[must_use]
    pub fn scratch_path(&self) -> PathBuf {
        self.scratch_path
            .clone()
            .unwrap_or_else(|| env::temp_dir().join(SCRATCH_FILE_NAME))
    }

    /// Backup suffix, defaulting to [`DEFAULT_BACKUP_SUFFIX`].
    #[must_use]
    pub fn backup_suffix(&self) -> &str {
        self.backup_suffix
            .as_deref()
            .unwrap_or(DEFAULT_BACKUP_SUFFIX)
    }

    /// A path resolver bounded by this configuration.
    #[must_use]
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new().with_max_path(self.max_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_path(), MAX_PATH);
        assert_eq!(config.backup_suffix(), "-bkp");
        assert_eq!(config.scratch_path(), env::temp_dir().join("texted.tmp"));
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = "max_path: 1024\nscratch_path: /var/tmp/scratch\nbackup_suffix: .bak\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.max_path(), 1024);
        assert_eq!(config.scratch_path(), PathBuf::from("/var/tmp/scratch"));
        assert_eq!(config.backup_suffix(), ".bak");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("tab_width: 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolver_uses_max_path() {
        let config = Config {
            max_path: Some(64),
            ..Default::default()
        };
        assert_eq!(config.resolver().max_path(), 64);
    }
}
