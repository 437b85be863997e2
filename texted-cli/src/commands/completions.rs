//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "texted";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; installation hints go to stderr so the
    /// output can be redirected straight into a completions file.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            print_install_hint(self.shell);
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    match shell {
        Shell::Bash => {
            eprintln!("#   texted completions bash > ~/.local/share/bash-completion/completions/texted");
        }
        Shell::Zsh => {
            eprintln!("#   texted completions zsh > ~/.zsh/completions/_texted");
        }
        Shell::Fish => {
            eprintln!("#   texted completions fish > ~/.config/fish/completions/texted.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   texted completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }
}
