//! Keep command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_user_path, shorten_path, GlobalOptions};
use clap::Args;
use texted::{Document, LoadSource};

/// Save the scratch buffer under a real name.
///
/// After this the file is an ordinary named file. The scratch buffer itself
/// is left untouched.
#[derive(Args)]
pub struct KeepCommand {
    /// Destination file
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Append to the destination instead of replacing it
    #[arg(long)]
    pub append: bool,
}

impl KeepCommand {
    /// Execute the keep command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = resolve_user_path(&self.file, &config)?;

        let mut doc = Document::open(LoadSource::Scratch, &config)?;
        if self.append {
            doc.append_to(&path)?;
        } else {
            doc.save_as(&path)?;
        }

        if !doc.is_scratch() && !global.quiet {
            eprintln!("New file created: {}", shorten_path(doc.target_path()));
        }

        println!("{}", doc.target_path().display());
        Ok(())
    }
}
