//! Application context
//!
//! Everything a registration pass reads or mutates, passed explicitly instead
//! of living in process-wide singletons: the container, the source-root map,
//! the class table, the lifecycle event bus and the record of what has been
//! bound so far.

use crate::addon::class_table::AddonClassTable;
use crate::addon::error::{AddonError, AddonResult};
use crate::addon::loader::SourceRootMap;
use crate::addon::naming::NamingConvention;
use crate::addon::provider::AddonServiceProvider;
use crate::addon::search_path::{compile_excludes, DirectoryLister, FsLister};
use crate::addon::settings::AddonSettings;
use crate::addon::traits::{Addon, AddonRef, ServiceProvider};
use crate::addon::types::{AddonDescriptor, RegistrationSummary, SearchPath};
use crate::container::api::{ContainerError, ServiceContainer};
use crate::notifications::api::NotificationManager;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

pub struct Application {
    pub(crate) settings: AddonSettings,
    pub(crate) search_path: SearchPath,
    pub(crate) excludes: Vec<glob::Pattern>,
    pub(crate) naming: NamingConvention,
    pub(crate) classes: AddonClassTable,
    pub(crate) container: ServiceContainer,
    pub(crate) source_roots: SourceRootMap,
    pub(crate) notifications: NotificationManager,
    pub(crate) lister: Box<dyn DirectoryLister>,
    /// Abstract key -> most recent descriptor bound under it
    pub(crate) bound: BTreeMap<String, AddonDescriptor>,
    /// Every descriptor in binding order, overridden ones included
    pub(crate) history: Vec<AddonDescriptor>,
    pub(crate) providers: Vec<String>,
    pub(crate) completed: HashSet<String>,
    pub(crate) summaries: Vec<RegistrationSummary>,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("search_path", &self.search_path)
            .field("classes", &self.classes)
            .field("container", &self.container)
            .field("bound", &self.bound.keys().collect::<Vec<_>>())
            .field("providers", &self.providers)
            .finish()
    }
}

impl Application {
    /// Context with the compiled-in addon classes and the real filesystem
    pub fn new(settings: AddonSettings) -> AddonResult<Self> {
        let excludes = compile_excludes(&settings.exclude)?;

        Ok(Self {
            search_path: settings.search_path(),
            naming: NamingConvention::new(&settings.namespace_root),
            excludes,
            settings,
            classes: AddonClassTable::with_builtins(),
            container: ServiceContainer::new(),
            source_roots: SourceRootMap::new(),
            notifications: NotificationManager::new(),
            lister: Box::new(FsLister),
            bound: BTreeMap::new(),
            history: Vec::new(),
            providers: Vec::new(),
            completed: HashSet::new(),
            summaries: Vec::new(),
        })
    }

    /// Replace the class table
    pub fn with_classes(mut self, classes: AddonClassTable) -> Self {
        self.classes = classes;
        self
    }

    /// Replace the directory lister
    pub fn with_lister(mut self, lister: Box<dyn DirectoryLister>) -> Self {
        self.lister = lister;
        self
    }

    /// Run every configured provider in order, stopping at the first error
    pub fn bootstrap(&mut self) -> AddonResult<&[RegistrationSummary]> {
        let providers = self.settings.providers.clone();
        self.bootstrap_providers(&providers)
    }

    /// Run the named providers in order, stopping at the first error
    pub fn bootstrap_providers(&mut self, names: &[String]) -> AddonResult<&[RegistrationSummary]> {
        for name in names {
            let provider = AddonServiceProvider::new(name)?.with_binding(self.settings.binding);
            self.register_provider(Box::new(provider))?;
        }
        Ok(&self.summaries)
    }

    /// Record `provider` and run its registration hook
    pub fn register_provider(&mut self, mut provider: Box<dyn ServiceProvider>) -> AddonResult<()> {
        log::debug!("Registering provider '{}'", provider.name());
        self.providers.push(provider.name().to_string());
        provider.register(self)
    }

    /// Resolve the addon bound under `key` through the container
    pub fn resolve_addon(&self, key: &str) -> AddonResult<AddonRef> {
        if !self.bound.contains_key(key) {
            return Err(AddonError::NotBound {
                key: key.to_string(),
            });
        }
        let handle = self.container.make_as::<AddonRef>(key)?;
        Ok((*handle).clone())
    }

    /// Resolve the addon bound under `key` as its concrete type
    pub fn resolve_addon_as<T: Addon + 'static>(&self, key: &str) -> AddonResult<Arc<T>> {
        self.resolve_addon(key)?
            .into_any_arc()
            .downcast::<T>()
            .map_err(|_| {
                AddonError::Container(ContainerError::TypeMismatch {
                    key: key.to_string(),
                    expected: std::any::type_name::<T>(),
                })
            })
    }

    /// Bound addons keyed by abstract key
    pub fn addons(&self) -> impl Iterator<Item = &AddonDescriptor> {
        self.bound.values()
    }

    pub fn addon(&self, key: &str) -> Option<&AddonDescriptor> {
        self.bound.get(key)
    }

    /// Every descriptor bound, in binding order, including overridden ones
    pub fn history(&self) -> &[AddonDescriptor] {
        &self.history
    }

    pub fn is_registered(&self, category_type: &str) -> bool {
        self.completed.contains(category_type)
    }

    pub fn settings(&self) -> &AddonSettings {
        &self.settings
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn classes(&self) -> &AddonClassTable {
        &self.classes
    }

    pub fn container(&self) -> &ServiceContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut ServiceContainer {
        &mut self.container
    }

    pub fn source_roots(&self) -> &SourceRootMap {
        &self.source_roots
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationManager {
        &mut self.notifications
    }

    pub fn registered_providers(&self) -> &[String] {
        &self.providers
    }

    pub fn summaries(&self) -> &[RegistrationSummary] {
        &self.summaries
    }

    pub(crate) fn record_bound(&mut self, descriptor: AddonDescriptor) {
        self.history.push(descriptor.clone());
        self.bound.insert(descriptor.abstract_key.clone(), descriptor);
    }

    pub(crate) fn mark_registered(&mut self, category_type: &str) {
        self.completed.insert(category_type.to_string());
    }
}
