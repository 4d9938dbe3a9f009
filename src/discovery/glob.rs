//! Ant-style glob translation and matching
//!
//! Only the subset needed for directory matching is supported: `**`, `*` and
//! `?`. There is no brace expansion and there are no character classes;
//! every other character matches itself.

use regex::Regex;

use super::error::DiscoveryError;
use super::placeholders::{ScannedPattern, Segment};

/// Render the filtering glob for a template.
///
/// The literal prefix passes through unchanged and every placeholder becomes
/// `**`, because a placeholder value may span several directory levels.
#[must_use]
pub fn translate_glob(scanned: &ScannedPattern) -> String {
    let mut glob = String::with_capacity(scanned.source().len());
    for segment in scanned.segments() {
        match segment {
            Segment::Literal(text) => glob.push_str(text),
            Segment::Placeholder(_) | Segment::AnyPath => glob.push_str("**"),
            Segment::AnySegment => glob.push('*'),
            Segment::AnyChar => glob.push('?'),
        }
    }
    glob
}

/// Compiled Ant-style glob over forward-slash paths
#[derive(Debug, Clone)]
pub struct AntGlob {
    original: String,
    compiled: Regex,
}

impl AntGlob {
    /// Compile an Ant-style glob.
    ///
    /// `**/` matches zero or more whole directories, a bare `**` matches any
    /// run of characters, `*` stays inside one path segment and `?` matches a
    /// single non-separator character. Matching is case-sensitive.
    ///
    /// # Errors
    /// Returns `DiscoveryError::MalformedPattern` if the glob is empty or the
    /// generated expression fails to compile.
    pub fn new(glob: &str) -> Result<Self, DiscoveryError> {
        if glob.is_empty() {
            return Err(DiscoveryError::malformed(glob, "empty glob"));
        }

        let mut expr = String::from("^");
        let mut literal = String::new();
        let mut rest = glob;
        while let Some(ch) = rest.chars().next() {
            let (piece, consumed) = if rest.starts_with("**/") {
                ("(?:.*/)?", 3)
            } else if rest.starts_with("**") {
                (".*", 2)
            } else if ch == '*' {
                ("[^/]*", 1)
            } else if ch == '?' {
                ("[^/]", 1)
            } else {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
                continue;
            };
            expr.push_str(&regex::escape(&std::mem::take(&mut literal)));
            expr.push_str(piece);
            rest = &rest[consumed..];
        }
        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        let compiled = Regex::new(&expr)
            .map_err(|e| DiscoveryError::malformed(glob, format!("invalid glob: {e}")))?;
        Ok(Self {
            original: glob.to_string(),
            compiled,
        })
    }

    /// Test a forward-slash normalized path
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.compiled.is_match(path)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }
}
