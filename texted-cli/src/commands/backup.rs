//! Backup command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_user_path, GlobalOptions};
use clap::Args;

/// Copy a file to its backup name.
///
/// The backup name inserts the configured suffix (default `-bkp`) between
/// the file stem and its extension, so `notes.txt` becomes `notes-bkp.txt`.
#[derive(Args)]
pub struct BackupCommand {
    /// File to back up
    #[arg(value_name = "FILE")]
    pub file: String,
}

impl BackupCommand {
    /// Execute the backup command.
    ///
    /// Prints the path of the written backup on stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = resolve_user_path(&self.file, &config)?;
        let written = texted::file::backup(&path, config.backup_suffix())?;

        println!("{}", written.display());
        Ok(())
    }
}
