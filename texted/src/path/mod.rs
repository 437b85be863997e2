//! Path resolution for user-typed file names.
//!
//! The editor accepts paths like `~/notes.txt`, `../src/main.rs` or
//! `/etc/./hosts` at its prompts. This module turns them into normalized
//! absolute paths before any file is opened.
//!
//! # Rules
//!
//! A leading shorthand is expanded first:
//!
//! - `~` or `~/...` becomes the home directory (`HOME`, then the passwd entry)
//! - `.` or `./...` becomes the current working directory
//! - `..` or `../...` becomes the parent of the current working directory
//!
//! Anything else is taken as written. Then, in a single pass:
//!
//! - `./` is dropped
//! - `..` removes the segment before it
//!
//! Resolution is purely textual. Symlinks are not followed, components need
//! not exist, and `..` above the root stops at `/`. Inputs of
//! [`MAX_PATH`] bytes or more are rejected.
//!
//! # Examples
//!
//! ```
//! use texted::path::resolve_path;
//!
//! assert_eq!(resolve_path("/a/b/../c").unwrap(), "/a/c");
//! assert_eq!(resolve_path("/a/./b").unwrap(), "/a/b");
//! ```

pub mod environment;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use environment::{home_dir, Environment, SystemEnvironment};
pub use resolver::{resolve_path, PathResolver, MAX_PATH};
