//! Addon service provider
//!
//! Drives one category through discovery, loading, binding and announcement:
//!
//! `Idle -> ResolvingPaths -> [Loading -> Binding -> Announced]* -> AllAnnounced -> Done`
//!
//! Any error moves the provider to `Failed` and stops the pass; the
//! `AllRegistered` announcement is only made once every addon is bound. A
//! provider runs once; a category already completed in the application cannot
//! be registered again.

use crate::addon::announcer::EventAnnouncer;
use crate::addon::binder::AddonBinder;
use crate::addon::context::Application;
use crate::addon::error::{AddonError, AddonResult};
use crate::addon::loader::AddonLoader;
use crate::addon::naming::AddonCategory;
use crate::addon::search_path::AddonRegistry;
use crate::addon::traits::ServiceProvider;
use crate::addon::types::{BindingMode, ProviderState, RegistrationSummary};
use crate::notifications::api::NotificationError;

#[derive(Debug)]
pub struct AddonServiceProvider {
    name: String,
    category: AddonCategory,
    binder: AddonBinder,
    state: ProviderState,
}

impl AddonServiceProvider {
    /// Provider for the category named by `provider_name`
    /// (`FieldTypeServiceProvider` -> `field-type`)
    pub fn new(provider_name: &str) -> AddonResult<Self> {
        let category = AddonCategory::from_provider_name(provider_name)?;
        Ok(Self::with_category(provider_name, category))
    }

    /// Provider for an explicit category type
    pub fn for_type(category_type: &str) -> Self {
        let category = AddonCategory::from_type(category_type);
        let name = format!("{}ServiceProvider", crate::core::strings::studly_case(category_type));
        Self::with_category(&name, category)
    }

    fn with_category(name: &str, category: AddonCategory) -> Self {
        Self {
            name: name.to_string(),
            category,
            binder: AddonBinder::default(),
            state: ProviderState::Idle,
        }
    }

    pub fn with_binding(mut self, mode: BindingMode) -> Self {
        self.binder = AddonBinder::new(mode);
        self
    }

    pub fn category(&self) -> &AddonCategory {
        &self.category
    }

    pub fn state(&self) -> ProviderState {
        self.state
    }

    /// Run the registration pass for this provider's category
    pub fn run(&mut self, app: &mut Application) -> AddonResult<RegistrationSummary> {
        let category_type = self.category.category_type().to_string();

        if self.state != ProviderState::Idle || app.is_registered(&category_type) {
            return Err(AddonError::AlreadyRegistered { category_type });
        }

        match self.register_all(app) {
            Ok(summary) => {
                self.transition(ProviderState::Done);
                app.mark_registered(&category_type);
                Ok(summary)
            }
            Err(e) => {
                self.transition(ProviderState::Failed);
                log::error!("Registration of {} addons aborted: {}", category_type, e);
                Err(e)
            }
        }
    }

    fn register_all(&mut self, app: &mut Application) -> AddonResult<RegistrationSummary> {
        let category_type = self.category.category_type().to_string();
        let mut summary = RegistrationSummary {
            provider: self.name.clone(),
            category_type: category_type.clone(),
            folder: self.category.folder().to_string(),
            registered: Vec::new(),
            listener_failures: 0,
        };

        self.transition(ProviderState::ResolvingPaths);
        let paths = AddonRegistry::new(&app.search_path, &app.excludes, app.lister.as_ref())
            .resolve_paths(&self.category)?;

        for discovered in &paths {
            self.transition(ProviderState::Loading);
            let loaded = AddonLoader::new(&app.naming, &app.classes, app.lister.as_ref()).load(
                &mut app.source_roots,
                &app.container,
                &category_type,
                discovered,
            )?;

            self.transition(ProviderState::Binding);
            let descriptor = self.binder.bind(app, loaded)?;

            let outcome = EventAnnouncer::new(&app.notifications).announce_registered(&descriptor);
            summary.listener_failures += self.listener_failures(outcome);
            summary.registered.push(descriptor.abstract_key);
            self.transition(ProviderState::Announced);
        }

        let outcome = EventAnnouncer::new(&app.notifications)
            .announce_all_registered(&category_type, summary.registered.len());
        summary.listener_failures += self.listener_failures(outcome);
        self.transition(ProviderState::AllAnnounced);

        Ok(summary)
    }

    fn listener_failures(&self, outcome: Result<usize, NotificationError>) -> usize {
        match outcome {
            Ok(_) => 0,
            Err(e) => {
                log::debug!("{}: {}", self.name, e);
                e.failed_count()
            }
        }
    }

    fn transition(&mut self, next: ProviderState) {
        log::trace!("{}: {} -> {}", self.name, self.state, next);
        self.state = next;
    }
}

impl ServiceProvider for AddonServiceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&mut self, app: &mut Application) -> AddonResult<()> {
        let summary = self.run(app)?;
        app.summaries.push(summary);
        Ok(())
    }
}
