//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: configuration
//! loading and turning user-typed paths into load sources.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use texted::{Config, ConfigBuilder, LoadSource};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the maximum path length.
    pub max_path: Option<usize>,

    /// Override the scratch buffer location.
    pub scratch_path: Option<PathBuf>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let overrides = Config {
        max_path: global.max_path,
        scratch_path: global.scratch_path.clone(),
        ..Default::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve a user-typed path with the configured bound.
pub fn resolve_user_path(input: &str, config: &Config) -> Result<PathBuf, CliError> {
    let resolved = config.resolver().resolve(input)?;
    Ok(PathBuf::from(resolved))
}

/// Pick the load source for a command taking `[FILE] [--scratch]`.
pub fn load_source(
    file: Option<&str>,
    scratch: bool,
    config: &Config,
) -> Result<LoadSource, CliError> {
    match (file, scratch) {
        (_, true) => Ok(LoadSource::Scratch),
        (Some(file), false) => Ok(LoadSource::Named(resolve_user_path(file, config)?)),
        (None, false) => Err(CliError::InvalidArguments(
            "a file name or --scratch is required".to_string(),
        )),
    }
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = std::env::var_os("HOME") {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
