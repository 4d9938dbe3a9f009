//! Transync - translation file discovery and sync planning
//!
//! This library finds translation files described by a path template such as
//! `locales/{language}/{namespace}.json`, recovers the placeholder values for
//! each file, and turns them into requests for a translation service.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod output;
pub mod requests;
pub mod template;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TransyncError {
    /// Discovery error
    #[error("Discovery error: {0}")]
    DiscoveryError(#[from] discovery::DiscoveryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Service URL could not be built
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
