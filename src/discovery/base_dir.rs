//! Base directory resolution
//!
//! The literal text before the earliest placeholder (or wildcard) is the only
//! part of a template known to name a real location without enumerating
//! placeholder values. That prefix becomes the traversal root.

use std::path::{Path, PathBuf};

use super::error::DiscoveryError;
use super::placeholders::ScannedPattern;

/// Where a discovery pass starts walking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectory {
    /// Literal prefix of the template, before any fallback
    pub prefix: String,
    /// Directory (or file, for literal templates) handed to the walker
    pub walk_root: PathBuf,
    /// Whether the prefix did not exist and was trimmed to its parent
    pub fell_back: bool,
}

impl BaseDirectory {
    /// Resolve the base directory for a scanned template.
    ///
    /// If the literal prefix does not exist it is trimmed back to its last `/`
    /// once. A prefix without any `/` falls back to the current directory.
    /// A root that still does not exist is not an error; the walk simply
    /// yields nothing.
    ///
    /// # Errors
    /// Returns `DiscoveryError::MalformedPattern` when the template starts with
    /// a placeholder or wildcard, leaving no literal prefix at all.
    pub fn resolve(scanned: &ScannedPattern) -> Result<Self, DiscoveryError> {
        let source = scanned.source();
        let prefix = match scanned.literal_prefix_len() {
            Some(0) => {
                return Err(DiscoveryError::malformed(
                    source,
                    "no literal directory prefix before the first placeholder",
                ));
            }
            Some(len) => &source[..len],
            None => source,
        };

        if Path::new(prefix).exists() {
            return Ok(Self {
                prefix: prefix.to_string(),
                walk_root: PathBuf::from(prefix),
                fell_back: false,
            });
        }

        let parent = parent_prefix(prefix);
        tracing::debug!(prefix, parent, "base directory missing, falling back to parent");
        Ok(Self {
            prefix: prefix.to_string(),
            walk_root: PathBuf::from(parent),
            fell_back: true,
        })
    }

    /// Whether the walk root is present on disk
    #[must_use]
    pub fn exists(&self) -> bool {
        self.walk_root.exists()
    }
}

/// Everything before the last `/` of `prefix`, ignoring a trailing one.
fn parent_prefix(prefix: &str) -> &str {
    let trimmed = prefix.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None if prefix.starts_with('/') => "/",
        None => ".",
    }
}
