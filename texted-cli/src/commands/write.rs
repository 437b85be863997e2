//! Write command implementation.
//!
//! Reads standard input into a buffer and saves it the way the editor's
//! save command does, optionally taking a backup first.

use crate::error::CliError;
use crate::utils::{load_configuration, load_source, shorten_path, GlobalOptions};
use clap::Args;
use std::io::Read;
use texted::{Document, LineBuffer};

/// Write standard input to a file or the scratch buffer.
#[derive(Args)]
pub struct WriteCommand {
    /// File to write
    #[arg(value_name = "FILE", required_unless_present = "scratch")]
    pub file: Option<String>,

    /// Write to the scratch buffer instead of a named file
    #[arg(long, conflicts_with_all = ["file", "backup"])]
    pub scratch: bool,

    /// Append to the file instead of replacing it
    #[arg(long)]
    pub append: bool,

    /// Copy the existing file to its backup name first
    #[arg(long)]
    pub backup: bool,
}

impl WriteCommand {
    /// Execute the write command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let source = load_source(self.file.as_deref(), self.scratch, &config)?;

        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        let mut doc = Document::new(source, LineBuffer::from_text(&input), &config);

        if self.backup {
            match doc.backup() {
                Ok(path) => log::info!("Backup written to {}", shorten_path(&path)),
                Err(e) if e.is_not_found() => {
                    log::info!("Nothing to back up at {}", doc.target_path().display());
                }
                Err(e) => return Err(e.into()),
            }
        }

        if self.append {
            let target = doc.target_path().to_path_buf();
            doc.append_to(target)?;
        } else {
            doc.save()?;
        }

        if !global.quiet {
            eprintln!(
                "Wrote {} lines to {}",
                doc.lines().len(),
                shorten_path(doc.target_path())
            );
        }

        Ok(())
    }
}
