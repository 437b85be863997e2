//! Where a buffer is loaded from.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::file::io::{read_file, write_file, LoadedFile, WriteMode};
use crate::file::line_buffer::LineBuffer;

/// The backing store of an editor buffer.
///
/// # Examples
///
/// ```
/// use texted::config::Config;
/// use texted::file::LoadSource;
/// use std::path::PathBuf;
///
/// let config = Config { scratch_path: Some("/tmp/s.txt".into()), ..Default::default() };
/// assert_eq!(LoadSource::Scratch.target(&config), PathBuf::from("/tmp/s.txt"));
/// assert_eq!(LoadSource::named("/a.txt").target(&config), PathBuf::from("/a.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// A file the user named.
    Named(PathBuf),
    /// The scratch buffer, backed by the configured scratch file.
    Scratch,
}

impl LoadSource {
    /// Shorthand for `LoadSource::Named(path.into())`.
    pub fn named(path: impl Into<PathBuf>) -> Self {
        Self::Named(path.into())
    }

    /// True for the scratch buffer.
    #[must_use]
    pub fn is_scratch(&self) -> bool {
        matches!(self, Self::Scratch)
    }

    /// The file that backs this source.
    #[must_use]
    pub fn target(&self, config: &Config) -> PathBuf {
        match self {
            Self::Named(path) => path.clone(),
            Self::Scratch => config.scratch_path(),
        }
    }
}

/// Read the content behind `source`.
///
/// A missing scratch file is created empty. A missing named file is an
/// error so the caller can decide whether to start a new file.
///
/// # Errors
///
/// Returns [`crate::Error::NoSuchFile`] for a missing named file, or an I/O
/// error.
pub fn load(source: &LoadSource, config: &Config) -> Result<LoadedFile> {
    match source {
        LoadSource::Named(path) => read_file(path),
        LoadSource::Scratch => load_scratch(&config.scratch_path()),
    }
}

/// Read the content behind `source` as lines.
///
/// # Errors
///
/// See [`load`].
pub fn load_lines(source: &LoadSource, config: &Config) -> Result<LineBuffer> {
    load(source, config).map(LoadedFile::into_lines)
}

fn load_scratch(path: &Path) -> Result<LoadedFile> {
    match read_file(path) {
        Err(e) if e.is_not_found() => {
            log::info!("creating scratch buffer at {}", path.display());
            write_file(path, "", WriteMode::Truncate)?;
            Ok(LoadedFile::default())
        }
        other => other,
    }
}
