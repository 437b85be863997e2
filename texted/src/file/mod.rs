//! Loading, saving and backing up editor buffers.
//!
//! Paths handed to these functions are expected to be resolved already,
//! usually with [`crate::path::resolve_path`].

pub mod backup;
pub mod document;
pub mod io;
pub mod line_buffer;
pub mod source;

pub use backup::{backup, backup_name};
pub use document::Document;
pub use io::{read_file, write_file, LoadedFile, WriteMode};
pub use line_buffer::LineBuffer;
pub use source::{load, load_lines, LoadSource};
