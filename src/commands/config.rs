//! Config command - inspect the effective configuration

use crate::{TransyncError, cli::ConfigCommands, config::ProjectConfig};

type Result<T> = std::result::Result<T, TransyncError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be serialized
pub fn execute(config: &ProjectConfig, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            print!("{}", config.masked().to_toml()?);
        }
    }
    Ok(())
}
