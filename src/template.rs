//! Rendering path templates from placeholder values
//!
//! The inverse of discovery: given values for `{language}` and friends,
//! produce the concrete path a downloaded file is written to.

use std::path::PathBuf;

use crate::discovery::{DiscoveryError, ScannedPattern, Segment};

/// Placeholder for the language key
pub const LANGUAGE_PLACEHOLDER: &str = "language";
/// Placeholder for the namespace
pub const NAMESPACE_PLACEHOLDER: &str = "namespace";

/// Substitute placeholder values into `pattern`.
///
/// Placeholders without a value render as the empty string. Wildcards are
/// kept verbatim.
///
/// # Errors
/// Returns `DiscoveryError::MalformedPattern` if the placeholder syntax is invalid.
pub fn render<'a, F>(pattern: &str, mut value_of: F) -> Result<PathBuf, DiscoveryError>
where
    F: FnMut(&str) -> Option<&'a str>,
{
    let scanned = ScannedPattern::scan(pattern)?;
    let mut out = String::with_capacity(pattern.len());
    for segment in scanned.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => out.push_str(value_of(name.as_str()).unwrap_or_default()),
            Segment::AnyPath => out.push_str("**"),
            Segment::AnySegment => out.push('*'),
            Segment::AnyChar => out.push('?'),
        }
    }
    Ok(PathBuf::from(out))
}

/// Render a download destination from a language and an optional namespace.
///
/// # Errors
/// Returns `DiscoveryError::MalformedPattern` if the placeholder syntax is invalid.
pub fn render_download_path(
    pattern: &str,
    language: &str,
    namespace: Option<&str>,
) -> Result<PathBuf, DiscoveryError> {
    render(pattern, |name| match name {
        LANGUAGE_PLACEHOLDER => Some(language),
        NAMESPACE_PLACEHOLDER => namespace,
        _ => None,
    })
}
