//! Cat command implementation.
//!
//! Loads a file (or the scratch buffer) the way the editor does and prints
//! its lines.

use crate::error::CliError;
use crate::utils::{load_configuration, load_source, GlobalOptions};
use clap::Args;
use texted::Document;

/// Print a file or the scratch buffer.
#[derive(Args)]
pub struct CatCommand {
    /// File to print
    #[arg(value_name = "FILE", required_unless_present = "scratch")]
    pub file: Option<String>,

    /// Print the scratch buffer instead of a named file
    #[arg(long, conflicts_with = "file")]
    pub scratch: bool,

    /// Prefix each line with its line number
    #[arg(short = 'n', long)]
    pub number: bool,
}

impl CatCommand {
    /// Execute the cat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let source = load_source(self.file.as_deref(), self.scratch, &config)?;
        let doc = Document::open(source, &config)?;

        let width = doc.lines().len().to_string().len();
        for (index, line) in doc.lines().iter().enumerate() {
            if self.number {
                println!("{:>width$}  {line}", index + 1);
            } else {
                println!("{line}");
            }
        }

        log::info!(
            "{}: {} lines, {} bytes",
            doc.target_path().display(),
            doc.lines().len(),
            doc.lines().byte_len()
        );

        Ok(())
    }
}
