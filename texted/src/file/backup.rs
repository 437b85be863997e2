//! Backup copies taken before destructive writes.
//!
//! Backups are named, not timestamped: a second backup of the same file
//! replaces the first.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the backup copy of `path`.
///
/// `suffix` goes before the extension of the file name, or at the end when
/// there is none. Names starting with a dot count as having no extension.
///
/// # Examples
///
/// ```
/// use texted::file::backup_name;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(backup_name(Path::new("/src/notes.txt"), "-bkp"), PathBuf::from("/src/notes-bkp.txt"));
/// assert_eq!(backup_name(Path::new("Makefile"), "-bkp"), PathBuf::from("Makefile-bkp"));
/// assert_eq!(backup_name(Path::new(".bashrc"), "-bkp"), PathBuf::from(".bashrc-bkp"));
/// ```
#[must_use]
pub fn backup_name(path: &Path, suffix: &str) -> PathBuf {
    let Some(stem) = path.file_stem() else {
        let mut name = path.as_os_str().to_owned();
        name.push(suffix);
        return PathBuf::from(name);
    };

    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Copy `path` to its backup name and return that name.
///
/// # Errors
///
/// Returns [`Error::NoSuchFile`] if `path` does not exist, or an I/O error
/// if the copy fails.
pub fn backup(path: &Path, suffix: &str) -> Result<PathBuf> {
    let target = backup_name(path, suffix);
    if !path.exists() {
        return Err(Error::NoSuchFile {
            path: path.to_path_buf(),
        });
    }

    fs::copy(path, &target)?;
    log::info!("backed up {} to {}", path.display(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_name_last_extension_only() {
        assert_eq!(
            backup_name(Path::new("dist/app.tar.gz"), "-bkp"),
            PathBuf::from("dist/app.tar-bkp.gz")
        );
    }

    #[test]
    fn test_backup_name_ignores_dots_in_directories() {
        assert_eq!(
            backup_name(Path::new("/etc/conf.d/hosts"), "-bkp"),
            PathBuf::from("/etc/conf.d/hosts-bkp")
        );
    }

    #[test]
    fn test_backup_name_custom_suffix() {
        assert_eq!(
            backup_name(Path::new("a.rs"), ".orig"),
            PathBuf::from("a.orig.rs")
        );
    }

    #[test]
    fn test_backup_name_without_file_name() {
        assert_eq!(backup_name(Path::new("/"), "-bkp"), PathBuf::from("/-bkp"));
    }

    #[test]
    fn test_backup_copies_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "keep me\n").unwrap();

        let target = backup(&path, "-bkp").unwrap();
        assert_eq!(target, dir.path().join("notes-bkp.txt"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
    }

    #[test]
    fn test_backup_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "v1").unwrap();
        backup(&path, "-bkp").unwrap();
        fs::write(&path, "v2").unwrap();

        let target = backup(&path, "-bkp").unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "v2");
    }

    #[test]
    fn test_backup_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = backup(&dir.path().join("ghost.txt"), "-bkp");
        assert!(matches!(result, Err(Error::NoSuchFile { .. })));
    }
}
