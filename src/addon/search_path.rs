//! Addon directory discovery
//!
//! For a category, each tier root contributes the immediate subdirectories of
//! `<root>/<folder>`. Tiers are concatenated in precedence order (core,
//! shared, application). A root that does not exist is the normal case for
//! most installs and contributes nothing. Hidden directories are ignored.

use crate::addon::error::{AddonError, AddonResult};
use crate::addon::naming::AddonCategory;
use crate::addon::types::{DiscoveredPath, SearchPath};
use std::path::{Path, PathBuf};

/// Filesystem access used by discovery
pub trait DirectoryLister {
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`
    fn list_directories(&self, path: &Path) -> std::io::Result<Vec<PathBuf>>;
}

/// Lists the real filesystem; entries are sorted by name
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directories(&self, path: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            // Follows symlinks so linked addon checkouts are picked up
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

pub struct AddonRegistry<'a> {
    search_path: &'a SearchPath,
    excludes: &'a [glob::Pattern],
    lister: &'a dyn DirectoryLister,
}

impl<'a> AddonRegistry<'a> {
    pub fn new(
        search_path: &'a SearchPath,
        excludes: &'a [glob::Pattern],
        lister: &'a dyn DirectoryLister,
    ) -> Self {
        Self {
            search_path,
            excludes,
            lister,
        }
    }

    /// Directories to load for `category`, in registration order
    pub fn resolve_paths(&self, category: &AddonCategory) -> AddonResult<Vec<DiscoveredPath>> {
        let mut paths = Vec::new();

        for (tier, root) in self.search_path.roots() {
            let dir = root.join(category.folder());
            if !self.lister.is_dir(&dir) {
                log::trace!("No {} addon directory at {}", tier, dir.display());
                continue;
            }

            let found = self
                .lister
                .list_directories(&dir)
                .map_err(|source| AddonError::Io {
                    path: dir.clone(),
                    source,
                })?;

            log::debug!(
                "Found {} {} {} in {}",
                found.len(),
                tier,
                category.folder(),
                dir.display()
            );

            paths.extend(
                found
                    .into_iter()
                    .filter(|path| self.keep(path))
                    .map(|path| DiscoveredPath { tier, path }),
            );
        }

        Ok(paths)
    }

    fn keep(&self, path: &Path) -> bool {
        let Some(slug) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if slug.is_empty() {
            return false;
        }
        // Hidden entries (.git, .idea) are never addons
        if slug.starts_with('.') {
            log::trace!("Skipping hidden directory {}", path.display());
            return false;
        }
        if let Some(pattern) = self.excludes.iter().find(|p| p.matches(slug)) {
            log::debug!("Skipping addon '{}' (excluded by '{}')", slug, pattern);
            return false;
        }
        true
    }
}

/// Compile exclude globs from configuration
pub fn compile_excludes(patterns: &[String]) -> AddonResult<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|p| {
            glob::Pattern::new(p).map_err(|e| AddonError::InvalidExcludePattern {
                pattern: p.clone(),
                cause: e.to_string(),
            })
        })
        .collect()
}
