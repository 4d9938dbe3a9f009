use std::path::Path;

use super::{DiscoveryError, DiscoveryReport};

/// Kind of discovery implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    /// Path template with `{placeholder}` tokens
    Template,
    /// Template without placeholders or wildcards, an existence check
    Literal,
}

/// Trait for file discovery based on a pre-validated path template
pub trait FileDiscovery {
    /// Discover matching files below `root`.
    ///
    /// Relative templates are resolved against `root`; absolute ones ignore it.
    ///
    /// # Errors
    /// Returns `DiscoveryError` if the template cannot be resolved or the walk fails.
    fn discover(&self, root: &Path) -> Result<DiscoveryReport, DiscoveryError>;

    /// Get the kind of discovery implementation
    #[must_use]
    fn kind(&self) -> DiscoveryKind;
}
