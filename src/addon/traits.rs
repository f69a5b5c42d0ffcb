//! Addon Trait System
//!
//! An addon is constructed by its class factory with the identity derived from
//! its directory. Beyond that it may opt into two capabilities:
//!
//! - **Listener**: receives every addon lifecycle event, across categories
//! - **Service provider**: a nested provider run right after the addon is bound
//!   so the addon can publish additional collaborators

use crate::addon::context::Application;
use crate::addon::error::AddonResult;
use crate::addon::naming::default_abstract_key;
use crate::addon::types::AddonIdentity;
use crate::notifications::api::AddonListener;
use std::any::Any;
use std::sync::Arc;

/// Shared handle to a constructed addon
pub type AddonRef = Arc<dyn Addon>;

/// Upcast to `Any` so a resolved addon can be recovered as its concrete type
pub trait AsAnyAddon {
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAnyAddon for T {
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

pub trait Addon: AsAnyAddon + Send + Sync + std::fmt::Debug {
    /// Identity computed from the addon's directory
    fn identity(&self) -> &AddonIdentity;

    /// Key the addon is published under in the container
    fn abstract_key(&self) -> String {
        default_abstract_key(self.identity())
    }

    /// Listener capability, if the addon wants lifecycle events
    fn to_listener(self: Arc<Self>) -> Option<Arc<dyn AddonListener>> {
        None
    }

    /// Nested provider to run after binding
    fn to_service_provider(&self) -> Option<Box<dyn ServiceProvider>> {
        None
    }
}

/// Something that registers collaborators into the application
pub trait ServiceProvider {
    /// Name recorded in the application's provider list
    fn name(&self) -> &str;

    fn register(&mut self, app: &mut Application) -> AddonResult<()>;
}
