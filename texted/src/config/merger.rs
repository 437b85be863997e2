//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use texted::config::{Config, ConfigMerger};
///
/// let low = Config { max_path: Some(1024), ..Default::default() };
/// let high = Config { max_path: Some(2048), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_path, Some(2048));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Overlay every field `source` sets onto `target`.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_path.is_some() {
            target.max_path = source.max_path;
        }
        if source.scratch_path.is_some() {
            target.scratch_path.clone_from(&source.scratch_path);
        }
        if source.backup_suffix.is_some() {
            target.backup_suffix.clone_from(&source.backup_suffix);
        }
    }
}
