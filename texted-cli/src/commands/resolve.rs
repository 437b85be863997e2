//! Resolve command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use serde::Serialize;

/// Resolve paths the way the editor does.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Resolution<'a> {
    input: &'a str,
    resolved: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// Stops at the first path that cannot be resolved.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = config.resolver();

        let resolutions = self
            .paths
            .iter()
            .map(|input| {
                resolver.resolve(input).map(|resolved| Resolution {
                    input,
                    resolved,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.json {
            let json = serde_json::to_string_pretty(&resolutions)
                .map_err(|e| CliError::Io(e.into()))?;
            println!("{json}");
        } else {
            for resolution in &resolutions {
                if global.verbose {
                    println!("{} -> {}", resolution.input, resolution.resolved);
                } else {
                    println!("{}", resolution.resolved);
                }
            }
        }

        Ok(())
    }
}
