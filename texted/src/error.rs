//! Error types for the texted library.
//!
//! Path resolution has its own small error type, [`PathError`], because its
//! callers (command prompts, the CLI) need to tell the failure kinds apart.
//! Everything else funnels into [`Error`], built with `thiserror` like the
//! rest of the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a texted error.
///
/// # Examples
///
/// ```
/// use texted::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of [`crate::path::resolve_path`].
///
/// None of these are fatal; the editor reports them and keeps running.
#[derive(Debug, Error)]
pub enum PathError {
    /// The input is longer than the path bound allows.
    #[error("path is too long ({len} bytes, limit is {max})")]
    InputTooLong {
        /// Length of the rejected input in bytes.
        len: usize,
        /// The configured maximum path length.
        max: usize,
    },

    /// `~` was used but no home directory could be found.
    #[error("cannot determine home directory")]
    HomeUnresolved,

    /// Substituting the home or working directory would exceed the bound.
    #[error("expanded path is too long ({len} bytes, limit is {max})")]
    ExpansionTooLong {
        /// Length the expanded path would have had.
        len: usize,
        /// The configured maximum path length.
        max: usize,
    },

    /// The current working directory could not be read.
    #[error("current directory is unavailable: {0}")]
    CwdUnavailable(#[source] io::Error),
}

/// The main error type for the texted library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A named file does not exist.
    #[error("no such file: {}", path.display())]
    NoSuchFile {
        /// The missing file.
        path: PathBuf,
    },

    /// A backup was requested for the scratch buffer.
    #[error("the scratch buffer cannot be backed up")]
    ScratchBackup,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns true if this error means a file or path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use texted::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NoSuchFile { path: PathBuf::from("/missing") };
    /// assert!(err.is_not_found());
    /// assert!(!Error::ScratchBackup.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NoSuchFile { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Map an I/O error on `path` into the library error, turning
    /// `NotFound` into [`Error::NoSuchFile`].
    pub(crate) fn from_io(path: &std::path::Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NoSuchFile {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}
