//! Testing utilities for transync
//!
//! This module provides a `TranslationTree` wrapper that lays out translation
//! files in a temporary directory for discovery tests.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory populated with translation files, removed on drop
///
/// # Examples
/// ```ignore
/// let tree = TranslationTree::new(&["locales/en.json", "locales/de.json"]);
/// assert!(tree.path().join("locales/en.json").exists());
/// ```
pub struct TranslationTree {
    dir: TempDir,
}

impl TranslationTree {
    /// Create a tree containing `files`, each written with an empty JSON object
    ///
    /// # Panics
    /// Panics if the temporary directory or any file cannot be created.
    #[must_use]
    pub fn new(files: &[&str]) -> Self {
        let tree = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        for file in files {
            tree.add(file);
        }
        tree
    }

    /// Add a file below the root, creating parent directories
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn add(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "{}").expect("Failed to write test file");
        path
    }

    /// Root of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
