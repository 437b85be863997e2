#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(missing_docs))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # texted
//!
//! File handling for the texted terminal editor.
//!
//! The library turns user-typed paths into normalized absolute paths, loads
//! files (or the scratch buffer) into line buffers, writes them back, and
//! takes backup copies before destructive writes.
//!
//! ## Core Types
//!
//! - [`PathResolver`] and [`resolve_path`]: `~`, `.` and `..` expansion
//! - [`Document`], [`LineBuffer`] and [`LoadSource`]: editor buffers on disk
//! - [`Config`] and [`ConfigBuilder`]: layered settings
//! - [`Error`], [`PathError`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use texted::resolve_path;
//!
//! assert_eq!(resolve_path("/srv/www/../log/./app.log").unwrap(), "/srv/log/app.log");
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod path;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, PathError, Result};
pub use file::{Document, LineBuffer, LoadSource, WriteMode};
pub use logging::{init_logger, select_level, LogLevel, Logger};
pub use path::{resolve_path, PathResolver, MAX_PATH};
