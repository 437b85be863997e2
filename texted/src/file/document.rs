//! An editor buffer together with where it came from.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::file::backup::backup;
use crate::file::io::{write_file, WriteMode};
use crate::file::line_buffer::LineBuffer;
use crate::file::source::{load_lines, LoadSource};

/// A buffer of lines and its backing file.
///
/// Scratch documents stay scratch until they are written under a real name;
/// from then on they behave like any named document.
///
/// # Examples
///
/// ```no_run
/// use texted::config::Config;
/// use texted::file::{Document, LoadSource};
///
/// let config = Config::default();
/// let mut doc = Document::open(LoadSource::Scratch, &config).unwrap();
/// doc.lines_mut().push("first draft");
/// doc.save_as("/home/alice/draft.txt").unwrap();
/// assert!(!doc.is_scratch());
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    source: LoadSource,
    lines: LineBuffer,
    scratch_path: PathBuf,
    backup_suffix: String,
}

impl Document {
    /// Load a document from `source`.
    ///
    /// # Errors
    ///
    /// See [`crate::file::load`].
    pub fn open(source: LoadSource, config: &Config) -> Result<Self> {
        let lines = load_lines(&source, config)?;
        Ok(Self::new(source, lines, config))
    }

    /// Wrap existing lines without touching the disk.
    #[must_use]
    pub fn new(source: LoadSource, lines: LineBuffer, config: &Config) -> Self {
        Self {
            source,
            lines,
            scratch_path: config.scratch_path(),
            backup_suffix: config.backup_suffix().to_owned(),
        }
    }

    /// Where this document is loaded from and saved to.
    #[must_use]
    pub fn source(&self) -> &LoadSource {
        &self.source
    }

    /// True while the document is the scratch buffer.
    #[must_use]
    pub fn is_scratch(&self) -> bool {
        self.source.is_scratch()
    }

    /// The lines of the document.
    #[must_use]
    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    /// Mutable access to the lines.
    pub fn lines_mut(&mut self) -> &mut LineBuffer {
        &mut self.lines
    }

    /// The file [`Document::save`] writes to.
    #[must_use]
    pub fn target_path(&self) -> &Path {
        match &self.source {
            LoadSource::Named(path) => path,
            LoadSource::Scratch => &self.scratch_path,
        }
    }

    /// Overwrite the backing file with the buffer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        write_file(self.target_path(), &self.lines.to_text(), WriteMode::Truncate)
    }

    /// Overwrite `path` with the buffer.
    ///
    /// A scratch document written anywhere other than the scratch file
    /// becomes a named document for `path`. A named document keeps its name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        write_file(&path, &self.lines.to_text(), WriteMode::Truncate)?;
        self.promote(path);
        Ok(())
    }

    /// Append the buffer to `path`.
    ///
    /// Like [`Document::save_as`], this ends scratch mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn append_to(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        write_file(&path, &self.lines.to_text(), WriteMode::Append)?;
        self.promote(path);
        Ok(())
    }

    /// Copy the backing file to its backup name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScratchBackup`] for scratch documents, and the
    /// errors of [`crate::file::backup()`] otherwise.
    pub fn backup(&self) -> Result<PathBuf> {
        match &self.source {
            LoadSource::Scratch => Err(Error::ScratchBackup),
            LoadSource::Named(path) => backup(path, &self.backup_suffix),
        }
    }

    fn promote(&mut self, path: PathBuf) {
        if self.is_scratch() && path != self.scratch_path {
            log::info!("New file created: {}", path.display());
            self.source = LoadSource::Named(path);
        }
    }
}
