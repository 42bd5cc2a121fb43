//! Env command handler.
//!
//! Prints the configuration facts a report would carry without contacting
//! the store. Useful to confirm a `.env` file was picked up.

use shopdiag_core::EnvironmentSnapshot;

use crate::bootstrap::CliConfig;
use crate::error::CliError;
use crate::presentation::to_pretty_json;

/// Execute the env command.
pub fn execute(config: &CliConfig) -> Result<(), CliError> {
    println!("{}", render(config)?);
    Ok(())
}

fn render(config: &CliConfig) -> Result<String, CliError> {
    to_pretty_json(&EnvironmentSnapshot::capture(&config.settings))
}
