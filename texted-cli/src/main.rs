//! Main entry point for the texted CLI.
//!
//! This is the command-line front end to the texted file library. It exposes
//! the editor's path resolution and file handling:
//! - `resolve`: Normalize `~`, `.` and `..` in paths
//! - `cat`, `write`: Load and save buffers
//! - `backup`, `keep`: Backup copies and scratch promotion

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _level = texted::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        max_path: cli.max_path,
        scratch_path: cli.scratch_path,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Cat(cmd) => cmd.execute(&global),
        cli::Command::Write(cmd) => cmd.execute(&global),
        cli::Command::Backup(cmd) => cmd.execute(&global),
        cli::Command::Keep(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
