//! Plain text field type

use crate::addon::error::AddonResult;
use crate::addon::traits::{Addon, AddonRef};
use crate::addon::types::{AddonDescriptor, AddonIdentity};
use crate::container::api::ServiceContainer;
use crate::notifications::api::{AddonListener, ListenerResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Text field type. Listens to lifecycle events to keep a count of the
/// addons registered after it.
#[derive(Debug)]
pub struct TextFieldType {
    identity: AddonIdentity,
    observed: AtomicUsize,
}

impl TextFieldType {
    pub fn new(identity: AddonIdentity) -> Self {
        Self {
            identity,
            observed: AtomicUsize::new(0),
        }
    }

    pub fn create(identity: &AddonIdentity, _container: &ServiceContainer) -> AddonResult<AddonRef> {
        Ok(Arc::new(Self::new(identity.clone())))
    }

    /// Registrations seen since this addon subscribed (its own included)
    pub fn observed(&self) -> usize {
        self.observed.load(Ordering::Relaxed)
    }
}

impl Addon for TextFieldType {
    fn identity(&self) -> &AddonIdentity {
        &self.identity
    }

    fn to_listener(self: Arc<Self>) -> Option<Arc<dyn AddonListener>> {
        Some(self)
    }
}

impl AddonListener for TextFieldType {
    fn listener_id(&self) -> &str {
        &self.identity.slug
    }

    fn on_registered(&self, descriptor: &AddonDescriptor) -> ListenerResult {
        self.observed.fetch_add(1, Ordering::Relaxed);
        log::trace!("{}: saw {}", self.identity.slug, descriptor.abstract_key);
        Ok(())
    }
}

crate::addon_class!(
    "Anomaly\\Streams\\Addon\\FieldType\\Text\\TextFieldType",
    TextFieldType::create
);
