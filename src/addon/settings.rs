//! Addon bootstrap settings
//!
//! The resolved configuration the bootstrap runs with, after the
//! configuration file and command line have been merged.

use crate::addon::naming::DEFAULT_NAMESPACE_ROOT;
use crate::addon::types::{BindingMode, SearchPath};
use std::path::{Path, PathBuf};

/// Providers registered when none are configured
pub const DEFAULT_PROVIDERS: [&str; 2] = ["FieldTypeServiceProvider", "BlockServiceProvider"];

#[derive(Debug, Clone, PartialEq)]
pub struct AddonSettings {
    /// Application base directory; tier roots are resolved against it
    pub base_path: PathBuf,
    /// Active application reference, selects `addons/<application>/`
    pub application: Option<String>,
    /// Tier root overrides; relative paths are taken from `base_path`
    pub core_path: Option<PathBuf>,
    pub shared_path: Option<PathBuf>,
    pub application_path: Option<PathBuf>,
    pub namespace_root: String,
    pub binding: BindingMode,
    /// Glob patterns matched against addon slugs
    pub exclude: Vec<String>,
    /// Provider names, run in order
    pub providers: Vec<String>,
}

impl Default for AddonSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            application: None,
            core_path: None,
            shared_path: None,
            application_path: None,
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
            binding: BindingMode::default(),
            exclude: Vec::new(),
            providers: DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl AddonSettings {
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Search roots: the standard layout with any overrides applied
    pub fn search_path(&self) -> SearchPath {
        let mut search_path = SearchPath::from_base(&self.base_path, self.application.as_deref());

        if let Some(core) = &self.core_path {
            search_path.core = Some(self.resolve(core));
        }
        if let Some(shared) = &self.shared_path {
            search_path.shared = Some(self.resolve(shared));
        }
        if let Some(application) = &self.application_path {
            search_path.application = Some(self.resolve(application));
        }

        search_path
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}
