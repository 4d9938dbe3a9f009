//! Transync CLI application entry point
//!
//! This is the main executable for transync. It discovers translation files
//! from a path template and plans the requests that sync them with a
//! translation service.
//!
//! # Usage
//!
//! ```bash
//! # List files for a template, with the values of each placeholder
//! transync discover "locales/{language}/{namespace}.json"
//!
//! # Same, using upload_path from transync.toml, as JSON
//! transync discover --json
//!
//! # Plan uploads for every file matched by upload_path
//! transync upload
//!
//! # Where would the German "common" namespace be written?
//! transync download-path -l de -n common
//!
//! # Quiet mode (only output results)
//! transync -q discover
//! ```
//!
//! # Configuration
//!
//! Settings are read from `./transync.toml` (or `--config <FILE>`) and can be
//! overridden with `TRANSYNC_*` environment variables, e.g. `TRANSYNC_API_KEY`.

use transync::{
    TransyncError,
    cli::{Cli, Commands},
    commands,
    config::{PathFormat, ProjectConfig},
    logging,
};

type Result<T> = std::result::Result<T, TransyncError>;

/// Main entry point for the transync application
///
/// Parses command-line arguments, loads configuration, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `TransyncError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let config = ProjectConfig::load(cli.config.as_deref())?;

    let quiet = cli.quiet || config.quiet;
    let path_format = if cli.absolute {
        PathFormat::Absolute
    } else {
        config.path_format
    };

    match &cli.command {
        Commands::Discover { pattern, args } => {
            commands::discover(pattern.as_deref(), args, &config, path_format, quiet)?;
        }
        Commands::Upload { args } => {
            commands::upload(args, &config, path_format, quiet)?;
        }
        Commands::Download { json } => {
            commands::download(&config, path_format, *json, quiet)?;
        }
        Commands::DownloadPath { language, namespace } => {
            commands::download_path(&config, language, namespace.as_deref(), path_format)?;
        }
        Commands::Config { command } => {
            commands::config(&config, command)?;
        }
    }

    Ok(())
}
