//! Template discovery engine
//!
//! Given a path template such as `translations/{namespace}/{language}.json`,
//! find every file it describes and recover the value each placeholder takes
//! for that file. The pipeline runs once per call:
//!
//! 1. scan the template into segments ([`ScannedPattern`])
//! 2. resolve the literal base directory ([`BaseDirectory`])
//! 3. translate the template into an Ant glob ([`translate_glob`], [`AntGlob`])
//! 4. walk the base directory to [`MAX_DEPTH`] ([`BoundedWalker`])
//! 5. extract placeholder values from each accepted file ([`TemplateExtractor`])
//!
//! # Examples
//!
//! ```no_run
//! use transync::discovery::discover;
//!
//! for found in discover("translations/{namespace}/{language}.json")? {
//!     println!("{} -> {:?}", found.path.display(), found.get("language"));
//! }
//! # Ok::<(), transync::discovery::DiscoveryError>(())
//! ```

pub mod base_dir;
pub mod error;
pub mod extract;
pub mod glob;
pub mod placeholders;
pub mod traits;
pub mod walker;

pub use base_dir::BaseDirectory;
pub use error::DiscoveryError;
pub use extract::TemplateExtractor;
pub use glob::{AntGlob, translate_glob};
pub use placeholders::{PlaceholderSet, ScannedPattern, Segment};
pub use traits::{DiscoveryKind, FileDiscovery};
pub use walker::{BoundedWalker, MAX_DEPTH, normalize};

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One discovered file with its placeholder values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Path in the host's native form
    pub path: PathBuf,
    /// Every declared placeholder, in first-occurrence order
    pub variables: PlaceholderSet,
}

impl ExtractionResult {
    /// Bound value of a placeholder, `None` if undeclared or unbound
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).and_then(Option::as_deref)
    }
}

/// What happens to a file that passes the glob but fails extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Leave the file out and record it in the report
    #[default]
    Skip,
    /// Abort the pass with `DiscoveryError::ExtractionMismatch`
    Fail,
}

/// Why a walked file is missing from the results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Rejected by the filtering glob
    GlobMismatch,
    /// Accepted by the glob, but placeholder values could not be bound
    ExtractionMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of one discovery pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryReport {
    pub results: Vec<ExtractionResult>,
    pub skipped: Vec<SkippedFile>,
}

impl DiscoveryReport {
    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of files skipped for `reason`
    #[must_use]
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    #[must_use]
    pub fn into_results(self) -> Vec<ExtractionResult> {
        self.results
    }

    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        tracing::debug!(path = %path.display(), ?reason, "skipping file");
        self.skipped.push(SkippedFile { path, reason });
    }
}

/// Discovery pass over one path template
#[derive(Debug, Clone)]
pub struct TemplateDiscovery {
    scanned: ScannedPattern,
    max_depth: usize,
    skip_policy: SkipPolicy,
}

impl TemplateDiscovery {
    /// Validate a template. Backslashes are read as `/`.
    ///
    /// # Errors
    /// Returns `DiscoveryError::MalformedPattern` if the placeholder syntax is invalid.
    pub fn new(pattern: &str) -> Result<Self, DiscoveryError> {
        let pattern = pattern.replace('\\', "/");
        if pattern.is_empty() {
            return Err(DiscoveryError::malformed(&pattern, "empty pattern"));
        }
        Ok(Self {
            scanned: ScannedPattern::scan(&pattern)?,
            max_depth: MAX_DEPTH,
            skip_policy: SkipPolicy::default(),
        })
    }

    /// Set how many levels below the base directory are walked
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub const fn skip_policy(mut self, policy: SkipPolicy) -> Self {
        self.skip_policy = policy;
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.scanned.source()
    }

    /// Placeholder names declared by the template, in first-occurrence order
    #[must_use]
    pub fn placeholder_names(&self) -> Vec<&str> {
        self.scanned.placeholder_names()
    }

    /// Run against the process working directory.
    ///
    /// # Errors
    /// Returns `DiscoveryError` if the template has no literal prefix, the
    /// walk fails, or an extraction mismatch occurs under `SkipPolicy::Fail`.
    pub fn run(&self) -> Result<DiscoveryReport, DiscoveryError> {
        self.run_scanned(&self.scanned)
    }

    fn run_scanned(&self, scanned: &ScannedPattern) -> Result<DiscoveryReport, DiscoveryError> {
        let base = BaseDirectory::resolve(scanned)?;
        let glob = AntGlob::new(&translate_glob(scanned))?;
        let extractor = TemplateExtractor::new(scanned)?;
        let mut report = DiscoveryReport::default();

        if !base.exists() {
            tracing::debug!(root = %base.walk_root.display(), "base directory does not exist");
            return Ok(report);
        }

        let walker = BoundedWalker::new(&base.walk_root)
            .max_depth(self.max_depth)
            .strip_current_dir(!scanned.source().starts_with("./"));
        for file in walker.files() {
            let path = file?;
            let normalized = normalize(&path);
            if !glob.matches(&normalized) {
                report.skip(path, SkipReason::GlobMismatch);
                continue;
            }
            match extractor.extract(&normalized) {
                Some(variables) => report.results.push(ExtractionResult { path, variables }),
                None if self.skip_policy == SkipPolicy::Fail => {
                    return Err(DiscoveryError::ExtractionMismatch {
                        pattern: scanned.source().to_string(),
                        path,
                    });
                }
                None => report.skip(path, SkipReason::ExtractionMismatch),
            }
        }

        tracing::debug!(
            pattern = scanned.source(),
            glob = glob.as_str(),
            found = report.results.len(),
            skipped = report.skip_count(),
            "discovery finished"
        );
        Ok(report)
    }
}

impl FileDiscovery for TemplateDiscovery {
    fn discover(&self, root: &Path) -> Result<DiscoveryReport, DiscoveryError> {
        let root = normalize(root);
        if root.is_empty() || root == "." || Path::new(self.pattern()).is_absolute() {
            return self.run();
        }
        self.run_scanned(&self.scanned.under_root(&root))
    }

    fn kind(&self) -> DiscoveryKind {
        if self.scanned.literal_prefix_len().is_none() {
            DiscoveryKind::Literal
        } else {
            DiscoveryKind::Template
        }
    }
}

/// Discover files for `pattern` relative to the working directory.
///
/// # Errors
/// Returns `DiscoveryError` for a malformed template or a failed walk.
pub fn discover(pattern: &str) -> Result<Vec<ExtractionResult>, DiscoveryError> {
    TemplateDiscovery::new(pattern)?
        .run()
        .map(DiscoveryReport::into_results)
}

/// Discover files for a relative `pattern` anchored at `root`.
///
/// # Errors
/// Returns `DiscoveryError` for a malformed template or a failed walk.
pub fn discover_in(root: &Path, pattern: &str) -> Result<Vec<ExtractionResult>, DiscoveryError> {
    TemplateDiscovery::new(pattern)?
        .discover(root)
        .map(DiscoveryReport::into_results)
}
