//! Placeholder value extraction
//!
//! The extraction regex is rendered from the same segments as the filtering
//! glob. Each placeholder occurrence becomes its own capture group, so a name
//! used twice is captured twice and the later capture wins.

use regex::Regex;

use super::error::DiscoveryError;
use super::placeholders::{PlaceholderSet, ScannedPattern, Segment};

/// Capture group substituted for each placeholder occurrence
const PLACEHOLDER_CAPTURE: &str = r"([\w\s]+?)";

/// Compiled extraction regex for one template
#[derive(Debug, Clone)]
pub struct TemplateExtractor {
    compiled: Regex,
    occurrences: Vec<String>,
    empty: PlaceholderSet,
}

impl TemplateExtractor {
    /// Build the extractor for a scanned template.
    ///
    /// # Errors
    /// Returns `DiscoveryError::MalformedPattern` if the generated expression
    /// fails to compile.
    pub fn new(scanned: &ScannedPattern) -> Result<Self, DiscoveryError> {
        let mut expr = String::from("^");
        for segment in scanned.segments() {
            match segment {
                Segment::Literal(text) => expr.push_str(&regex::escape(text)),
                Segment::Placeholder(_) => expr.push_str(PLACEHOLDER_CAPTURE),
                Segment::AnyPath => expr.push_str(".*?"),
                Segment::AnySegment => expr.push_str("[^/]*?"),
                Segment::AnyChar => expr.push_str("[^/]"),
            }
        }
        expr.push('$');

        let compiled = Regex::new(&expr).map_err(|e| {
            DiscoveryError::malformed(scanned.source(), format!("invalid extraction expression: {e}"))
        })?;
        Ok(Self {
            compiled,
            occurrences: scanned.occurrences().map(str::to_string).collect(),
            empty: scanned.placeholder_set(),
        })
    }

    /// Extract placeholder values from a forward-slash normalized path.
    ///
    /// Returns `None` if the path does not match. Values are trimmed and a
    /// value that is empty after trimming stays unbound.
    #[must_use]
    pub fn extract(&self, path: &str) -> Option<PlaceholderSet> {
        let captures = self.compiled.captures(path)?;
        let mut values = self.empty.clone();
        for (idx, name) in self.occurrences.iter().enumerate() {
            let value = captures
                .get(idx + 1)
                .map(|m| m.as_str().trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            values.insert(name.clone(), value);
        }
        Some(values)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.compiled.as_str()
    }
}
