//! Layered configuration builder.

use std::env;
use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective [`Config`] from files, environment and overrides.
///
/// # Examples
///
/// ```
/// use texted::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_path: Some(1024), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.max_path(), 1024);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for `texted.yaml` in `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Read the user config from `dir` instead of `~/.texted`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `TEXTED_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all layers, validate, and expand the scratch path.
    ///
    /// A scratch path written as `~/...` or `./...` is resolved with the
    /// configured path bound.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, an environment override
    /// is invalid, validation fails, or the scratch path cannot be resolved.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            config = ConfigMerger::merge(sources);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Self::expand_scratch_path(&mut config)?;
        Ok(config)
    }

    fn expand_scratch_path(config: &mut Config) -> Result<()> {
        // Non-UTF-8 paths cannot contain shorthand worth expanding.
        let Some(text) = config.scratch_path.as_ref().and_then(|p| p.to_str()) else {
            return Ok(());
        };
        let resolved = config.resolver().resolve(text)?;
        config.scratch_path = Some(PathBuf::from(resolved));
        Ok(())
    }
}
