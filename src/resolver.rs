//! Resolver - finds files accepted by a path filter
//!
//! Walks a directory tree and returns root-relative paths that pass a
//! [`PathFilter`].
//!
//! # Examples
//!
//! ```no_run
//! use globrx::core::PathFilter;
//! use globrx::resolver::Resolver;
//!
//! let resolver = Resolver::new(".").unwrap();
//! let filter = PathFilter::new(["src/**/*.rs"], ["**/generated/**"]).unwrap();
//! let files = resolver.find_files(&filter).unwrap();
//! ```

use std::path::{Path, PathBuf};

use log::{debug, trace};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::WalkConfig;
use crate::core::PathFilter;

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Resolver for finding files under a root directory
#[derive(Debug)]
pub struct Resolver {
    /// Root directory to resolve from
    root: PathBuf,

    /// Walk options
    walk: WalkConfig,
}

impl Resolver {
    /// Create a new resolver rooted at the given path
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(ResolveError::RootNotFound(root));
        }

        // A bare relative file name has an empty parent
        let root = if root.is_file() {
            match root.parent() {
                Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
                Some(parent) => parent.to_path_buf(),
                None => return Err(ResolveError::NotADirectory(root)),
            }
        } else {
            root
        };

        Ok(Self {
            root,
            walk: WalkConfig::default(),
        })
    }

    /// Use the given walk options
    #[must_use]
    pub fn with_walk(mut self, walk: WalkConfig) -> Self {
        self.walk = walk;
        self
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find all files accepted by the filter, sorted
    pub fn find_files(&self, filter: &PathFilter) -> Result<Vec<PathBuf>, ResolveError> {
        let mut matches = Vec::new();
        let root = &self.root;
        let hidden = self.walk.hidden;

        debug!(
            "walking {} (hidden: {}, follow_links: {})",
            root.display(),
            hidden,
            self.walk.follow_links
        );

        for entry in WalkDir::new(root)
            .follow_links(self.walk.follow_links)
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == root {
                    return true;
                }
                hidden || !Self::is_hidden(e)
            })
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();

            if filter.accepts(&relative) {
                trace!("accepted {}", relative.display());
                matches.push(relative);
            }
        }

        // Sort for deterministic output
        matches.sort();
        debug!("{} file(s) accepted under {}", matches.len(), root.display());
        Ok(matches)
    }

    /// Check if an entry is hidden (starts with .)
    fn is_hidden(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
    }
}
