//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BackupCommand, CatCommand, CompletionsCommand, KeepCommand, ResolveCommand, WriteCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// File and path utilities for the texted editor.
#[derive(Parser)]
#[command(name = "texted")]
#[command(version, about = "File and path utilities for the texted editor", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Maximum accepted path length in bytes
    #[arg(long, value_name = "BYTES", global = true, env = "TEXTED_MAX_PATH")]
    pub max_path: Option<usize>,

    /// File backing the scratch buffer
    #[arg(long, value_name = "PATH", global = true, env = "TEXTED_SCRATCH_PATH")]
    pub scratch_path: Option<PathBuf>,

    /// Directory holding the user config.yaml (default: ~/.texted)
    #[arg(long, value_name = "DIR", global = true, env = "TEXTED_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve paths the way the editor does
    Resolve(ResolveCommand),

    /// Print a file or the scratch buffer
    Cat(CatCommand),

    /// Write standard input to a file or the scratch buffer
    Write(WriteCommand),

    /// Copy a file to its backup name
    Backup(BackupCommand),

    /// Save the scratch buffer under a real name
    Keep(KeepCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
