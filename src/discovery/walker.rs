//! Depth-bounded directory traversal

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::DiscoveryError;

/// Default number of levels walked below the base directory
pub const MAX_DEPTH: usize = 6;

/// Walks a tree to a fixed depth, yielding regular files only
#[derive(Debug, Clone)]
pub struct BoundedWalker {
    root: PathBuf,
    max_depth: usize,
    strip_current_dir: bool,
}

impl BoundedWalker {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: MAX_DEPTH,
            strip_current_dir: true,
        }
    }

    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Whether a current-directory root drops the leading `./` from paths.
    /// Templates written as `./...` need it kept to match.
    #[must_use]
    pub const fn strip_current_dir(mut self, strip: bool) -> Self {
        self.strip_current_dir = strip;
        self
    }

    /// Iterate regular files under the root.
    ///
    /// A missing root yields nothing. Symlinks are not followed, so cycles
    /// cannot occur and links never appear in the output. A current-directory
    /// root (`.`) yields paths without the leading `./` unless
    /// [`strip_current_dir`](Self::strip_current_dir) is turned off.
    /// Open directory handles belong to the iterator and close when it drops.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf, DiscoveryError>> + '_ {
        let exists = self.root.exists();
        let strip_dot = self.strip_current_dir && self.root == Path::new(".");
        WalkDir::new(&self.root)
            .max_depth(self.max_depth)
            .follow_links(false)
            .into_iter()
            .take_while(move |_| exists)
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let path = entry.into_path();
                    if strip_dot {
                        Some(Ok(path
                            .strip_prefix(".")
                            .map(Path::to_path_buf)
                            .unwrap_or(path)))
                    } else {
                        Some(Ok(path))
                    }
                }
                Ok(_) => None,
                Err(source) => {
                    let path = source
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    Some(Err(DiscoveryError::Traversal { path, source }))
                }
            })
    }
}

/// Render a path with `/` separators for matching
#[must_use]
pub fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
