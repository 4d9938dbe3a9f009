//! Errors raised by the template discovery engine
//!
//! Only setup and traversal failures are errors. Files that fail the glob or
//! the extraction regex are skips, recorded in the
//! [`DiscoveryReport`](super::DiscoveryReport) unless the caller asked for
//! [`SkipPolicy::Fail`](super::SkipPolicy::Fail).

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while discovering files for a path template
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The template cannot be split into a base directory and a placeholder suffix
    #[error("Malformed path pattern '{pattern}': {reason}")]
    MalformedPattern { pattern: String, reason: String },

    /// The directory walk failed partway through
    #[error("Failed to traverse '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file passed the glob but the extraction regex did not bind
    #[error("File '{}' does not match pattern '{pattern}'", path.display())]
    ExtractionMismatch { pattern: String, path: PathBuf },
}

impl DiscoveryError {
    #[must_use]
    pub fn malformed(pattern: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
