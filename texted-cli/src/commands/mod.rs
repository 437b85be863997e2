//! Command implementations for the texted CLI.
//!
//! Each command is implemented in its own module:
//! - `resolve`: Print the normalized form of user-typed paths
//! - `cat`: Print a file or the scratch buffer
//! - `write`: Replace or extend a file from standard input
//! - `backup`: Copy a file to its backup name
//! - `keep`: Save the scratch buffer under a real name
//! - `completions`: Generate shell completion scripts

pub mod backup;
pub mod cat;
pub mod completions;
pub mod keep;
pub mod resolve;
pub mod write;

pub use backup::BackupCommand;
pub use cat::CatCommand;
pub use completions::CompletionsCommand;
pub use keep::KeepCommand;
pub use resolve::ResolveCommand;
pub use write::WriteCommand;
