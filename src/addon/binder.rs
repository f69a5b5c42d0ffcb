//! Addon binding
//!
//! Publishes a loaded addon into the container, runs its nested service
//! provider and subscribes it to lifecycle events when it asks for them.
//! Binding a key that is already bound replaces the earlier binding, which is
//! how an application-tier addon overrides a core addon of the same slug.

use crate::addon::context::Application;
use crate::addon::error::{AddonError, AddonResult};
use crate::addon::loader::LoadedAddon;
use crate::addon::types::{AddonDescriptor, BindingMode};
use crate::container::api::{Container, ContainerError, Factory, Instance, ServiceContainer};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddonBinder {
    mode: BindingMode,
}

impl AddonBinder {
    pub fn new(mode: BindingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    pub fn bind(&self, app: &mut Application, loaded: LoadedAddon) -> AddonResult<AddonDescriptor> {
        let LoadedAddon {
            identity,
            addon,
            factory,
        } = loaded;
        let key = addon.abstract_key();

        let instance_factory: Factory = match self.mode {
            BindingMode::Singleton => {
                let addon = addon.clone();
                Box::new(move |_: &ServiceContainer| Ok(Arc::new(addon.clone()) as Instance))
            }
            BindingMode::Transient => {
                let identity = identity.clone();
                Box::new(move |container: &ServiceContainer| {
                    factory(&identity, container)
                        .map(|fresh| Arc::new(fresh) as Instance)
                        .map_err(|e| ContainerError::FactoryFailed {
                            key: identity.class_identity.to_string(),
                            message: e.to_string(),
                        })
                })
            }
        };

        let replaced = app
            .container
            .bind(&key, instance_factory, self.mode.is_shared());
        if replaced {
            match app.bound.get(&key) {
                Some(previous) => log::warn!(
                    "Binding '{}' from {} ({}) replaces the one from {} ({})",
                    key,
                    identity.path.display(),
                    identity.tier,
                    previous.identity.path.display(),
                    previous.tier()
                ),
                None => log::warn!("Binding '{}' replaces an existing service", key),
            }
        }

        let slug = identity.slug.clone();
        let descriptor = AddonDescriptor {
            identity,
            abstract_key: key.clone(),
        };
        app.record_bound(descriptor.clone());

        if let Some(provider) = addon.to_service_provider() {
            let provider_name = provider.name().to_string();
            log::debug!("Running service provider '{}' of addon '{}'", provider_name, slug);
            app.register_provider(provider)
                .map_err(|e| AddonError::ProviderFailed {
                    provider: provider_name,
                    slug: slug.clone(),
                    source: Box::new(e),
                })?;
        }

        if let Some(listener) = addon.clone().to_listener() {
            app.notifications.subscribe(listener);
        }

        log::info!(
            "Registered {} addon '{}' as '{}'",
            descriptor.category_type(),
            slug,
            key
        );

        Ok(descriptor)
    }
}
