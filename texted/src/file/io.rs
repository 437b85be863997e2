//! Whole-file reads and writes.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::file::line_buffer::LineBuffer;

/// Content read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedFile {
    /// Number of bytes read from disk.
    pub bytes: usize,
    /// Decoded content.
    pub content: String,
}

impl LoadedFile {
    /// Split the content into lines.
    #[must_use]
    pub fn into_lines(self) -> LineBuffer {
        LineBuffer::from_text(&self.content)
    }
}

/// How [`write_file`] treats existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file's content.
    #[default]
    Truncate,
    /// Add to the end of the file.
    Append,
}

/// Read a whole file.
///
/// Invalid UTF-8 is replaced with U+FFFD and a warning is logged; `bytes`
/// still reports the size on disk.
///
/// # Errors
///
/// Returns [`Error::NoSuchFile`] if `path` does not exist, or an I/O error.
///
/// # Examples
///
/// ```no_run
/// use texted::file::read_file;
/// use std::path::Path;
///
/// let loaded = read_file(Path::new("/etc/hostname")).unwrap();
/// println!("{} bytes", loaded.bytes);
/// ```
pub fn read_file(path: &Path) -> Result<LoadedFile> {
    let raw = fs::read(path).map_err(|e| Error::from_io(path, e))?;
    let bytes = raw.len();

    let content = match String::from_utf8(raw) {
        Ok(content) => content,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    log::debug!("read {bytes} bytes from {}", path.display());
    Ok(LoadedFile { bytes, content })
}

/// Write `content` to `path`, creating the file if needed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or written.
pub fn write_file(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;

    log::debug!(
        "wrote {} bytes to {} ({mode:?})",
        content.len(),
        path.display()
    );
    Ok(())
}
