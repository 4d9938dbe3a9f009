//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including path display formatting and discovered-file formatting.

use crate::config::PathFormat;
use crate::discovery::{DiscoveryKind, DiscoveryReport, ExtractionResult, SkipReason};
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            path.display().to_string()
        }
        PathFormat::Absolute => {
            if path.is_absolute() {
                return path.display().to_string();
            }
            std::env::current_dir()
                .map_or_else(|_| path.display().to_string(), |cwd| cwd.join(path).display().to_string())
        }
    }
}

/// Format placeholder values as `name=value`, unbound values as `name=*`
#[must_use]
pub fn variables(found: &ExtractionResult) -> String {
    found
        .variables
        .iter()
        .map(|(name, value)| format!("{name}={}", value.as_deref().unwrap_or("*")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a discovered file with its placeholder values for display
#[must_use]
pub fn file_with_variables(found: &ExtractionResult, format: PathFormat, quiet: bool) -> String {
    let path_str = format_path(&found.path, format);

    if quiet {
        path_str
    } else if found.variables.is_empty() {
        format!("  {path_str}")
    } else {
        format!("  {} [{}]", path_str, variables(found).cyan())
    }
}

/// One-line summary of a discovery pass
#[must_use]
pub fn discovery_summary(report: &DiscoveryReport) -> String {
    let found = report.results.len();
    let mismatched = report.skipped_for(SkipReason::ExtractionMismatch);
    let filtered = report.skipped_for(SkipReason::GlobMismatch);
    let mut line = format!("Found {found} file(s)");
    if filtered > 0 {
        line.push_str(&format!(", {filtered} ignored"));
    }
    if mismatched > 0 {
        line.push_str(&format!(", {} skipped (placeholder values could not be read)", mismatched.to_string().yellow()));
    }
    line
}

/// Message for a pass that found nothing. A literal template is an
/// existence check, so it reads as a missing file.
#[must_use]
pub fn no_results(pattern: &str, kind: DiscoveryKind) -> String {
    match kind {
        DiscoveryKind::Literal => format!("File '{pattern}' does not exist"),
        DiscoveryKind::Template => format!("No files found for '{pattern}'"),
    }
}

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a warning message to stderr
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

/// Print a dimmed informational message
pub fn info(message: &str) {
    println!("{}", message.dimmed());
}
