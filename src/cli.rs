//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for transync using the `clap` crate.
//!
//! # Commands
//!
//! - **discover**: Find files for a path template and show their placeholder values
//! - **upload**: Plan one upload request per discovered file
//! - **download**: Plan the export request and show where files would be written
//! - **download-path**: Render the download template for a language/namespace
//! - **config**: Show the effective configuration
//!
//! # Examples
//!
//! ```no_run
//! use transync::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! if let Commands::Discover { pattern, .. } = &cli.command {
//!     println!("pattern: {pattern:?}");
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shared arguments for commands that run discovery
#[derive(Parser, Debug, Clone)]
pub struct DiscoveryArgs {
    /// Directory relative templates are resolved against (default: current directory)
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Levels walked below the base directory (overrides config)
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Fail instead of skipping files whose placeholder values cannot be read
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print machine-readable JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration (API key masked)
    Show,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "transync")]
#[command(about = "Discover translation files and plan syncs with a translation service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./transync.toml)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true)]
    pub absolute: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Find files matching a path template and show placeholder values
    #[command(visible_alias = "d")]
    Discover {
        /// Path template, e.g. locales/{language}/{namespace}.json (default: upload_path)
        #[arg(value_name = "PATTERN")]
        pattern: Option<String>,

        #[command(flatten)]
        args: DiscoveryArgs,
    },

    /// Plan one upload request per file matched by upload_path
    #[command(visible_alias = "up")]
    Upload {
        #[command(flatten)]
        args: DiscoveryArgs,
    },

    /// Plan the export request and show where files would be written
    Download {
        /// Print machine-readable JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Render download_path for a language and namespace
    #[command(name = "download-path")]
    DownloadPath {
        /// Language key substituted for {language}
        #[arg(short = 'l', long = "language", value_name = "KEY")]
        language: String,

        /// Namespace substituted for {namespace}
        #[arg(short = 'n', long = "namespace", value_name = "NAME")]
        namespace: Option<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
