//! Addon loading
//!
//! Turns a discovered directory into a constructed addon. The directory's
//! `src/` folder is registered as the resolution root for the addon's
//! namespace before the class is looked up, so a failed lookup can say where
//! the class was expected to live.

use crate::addon::class_table::AddonClassTable;
use crate::addon::error::{AddonError, AddonResult};
use crate::addon::naming::NamingConvention;
use crate::addon::search_path::DirectoryLister;
use crate::addon::traits::AddonRef;
use crate::addon::types::{AddonIdentity, DiscoveredPath};
use crate::container::api::ServiceContainer;
use std::path::{Path, PathBuf};

/// Namespace prefix -> source directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRootMap {
    roots: Vec<(String, PathBuf)>,
}

impl SourceRootMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map symbols under `prefix` to files under `dir`. Re-adding a prefix
    /// replaces its directory.
    pub fn add_prefix_root(&mut self, prefix: &str, dir: &Path) {
        let prefix = normalise_prefix(prefix);
        log::trace!("Source root {} -> {}", prefix, dir.display());
        match self.roots.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = dir.to_path_buf(),
            None => self.roots.push((prefix, dir.to_path_buf())),
        }
    }

    /// Location a symbol resolves to, using the longest matching prefix.
    /// `Ns\Sub\Thing` under root `Ns\` maps to `<dir>/Sub/Thing`.
    pub fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .filter(|(prefix, _)| symbol.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, dir)| {
                symbol[prefix.len()..]
                    .split('\\')
                    .filter(|s| !s.is_empty())
                    .fold(dir.clone(), |acc, part| acc.join(part))
            })
    }

    pub fn root_for(&self, prefix: &str) -> Option<&Path> {
        let prefix = normalise_prefix(prefix);
        self.roots
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, dir)| dir.as_path())
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.roots.iter().map(|(p, d)| (p.as_str(), d.as_path()))
    }
}

fn normalise_prefix(prefix: &str) -> String {
    format!("{}\\", prefix.trim_end_matches('\\'))
}

/// A constructed addon and where it came from
#[derive(Debug, Clone)]
pub struct LoadedAddon {
    pub identity: AddonIdentity,
    pub addon: AddonRef,
    /// Kept so transient bindings can build fresh instances
    pub(crate) factory: crate::addon::class_table::AddonFactory,
}

pub struct AddonLoader<'a> {
    naming: &'a NamingConvention,
    classes: &'a AddonClassTable,
    lister: &'a dyn DirectoryLister,
}

impl<'a> AddonLoader<'a> {
    pub fn new(
        naming: &'a NamingConvention,
        classes: &'a AddonClassTable,
        lister: &'a dyn DirectoryLister,
    ) -> Self {
        Self {
            naming,
            classes,
            lister,
        }
    }

    /// Compute the identity of the addon in `discovered`
    pub fn identify(&self, category_type: &str, discovered: &DiscoveredPath) -> AddonIdentity {
        let slug = discovered
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        AddonIdentity {
            namespace: self.naming.namespace(category_type, &slug),
            class_identity: self.naming.class_identity(category_type, &slug),
            source_root: discovered.path.join("src"),
            path: discovered.path.clone(),
            tier: discovered.tier,
            category_type: category_type.to_string(),
            slug,
        }
    }

    /// Register the source root, then construct the addon class
    pub fn load(
        &self,
        source_roots: &mut SourceRootMap,
        container: &ServiceContainer,
        category_type: &str,
        discovered: &DiscoveredPath,
    ) -> AddonResult<LoadedAddon> {
        let identity = self.identify(category_type, discovered);

        if !self.lister.is_dir(&identity.source_root) {
            return Err(AddonError::MissingSourceRoot {
                slug: identity.slug,
                source_root: identity.source_root,
            });
        }

        source_roots.add_prefix_root(&identity.namespace, &identity.source_root);

        let class = identity.class_identity.clone();
        let factory = self
            .classes
            .resolve(&class)
            .ok_or_else(|| AddonError::UnresolvedClass {
                class: class.to_string(),
                slug: identity.slug.clone(),
                expected: source_roots
                    .resolve(class.as_str())
                    .unwrap_or_else(|| identity.source_root.clone()),
            })?;

        let addon = factory(&identity, container).map_err(|e| match e {
            AddonError::ConstructionFailed { .. } => e,
            other => AddonError::ConstructionFailed {
                class: class.to_string(),
                cause: other.to_string(),
            },
        })?;

        log::debug!("Loaded {} from {}", class, identity.path.display());

        Ok(LoadedAddon {
            identity,
            addon,
            factory,
        })
    }
}
