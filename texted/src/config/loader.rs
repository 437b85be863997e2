//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-directory configuration file.
pub const PROJECT_CONFIG_FILE: &str = "texted.yaml";

/// Name of the user configuration file inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user and project files.
///
/// # Examples
///
/// ```no_run
/// use texted::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Looks for:
    /// 1. `config.yaml` in `config_dir`, or in `~/.texted` (precedence 1)
    /// 2. `texted.yaml` in `working_dir` (precedence 2)
    ///
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let user_dir = match config_dir {
            Some(dir) => Some(dir.to_path_buf()),
            None => default_config_dir(),
        };
        if let Some(dir) = user_dir {
            if let Some(source) = Self::load_optional(&dir.join(USER_CONFIG_FILE), 1)? {
                sources.push(source);
            }
        }

        if let Some(source) = Self::load_optional(&working_dir.join(PROJECT_CONFIG_FILE), 2)? {
            sources.push(source);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_optional(path: &Path, precedence: u8) -> Result<Option<ConfigSource>> {
        if !path.exists() {
            return Ok(None);
        }

        log::debug!("loading configuration from {}", path.display());
        let config = Self::load_file(path)?;
        Ok(Some(ConfigSource {
            path: path.to_path_buf(),
            precedence,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

/// The user configuration directory, `~/.texted`.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".texted"))
}
