//! Traits for the notification system

use crate::addon::types::AddonDescriptor;

/// Result returned by listener callbacks
pub type ListenerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Observer of addon lifecycle phases.
///
/// Both callbacks default to doing nothing, so a listener implements only the
/// phases it needs. Errors are logged by the manager and never undo a
/// registration.
pub trait AddonListener: Send + Sync {
    /// Unique identifier used in logs and failure reports
    fn listener_id(&self) -> &str;

    /// Called after each addon is bound
    fn on_registered(&self, _descriptor: &AddonDescriptor) -> ListenerResult {
        Ok(())
    }

    /// Called once a category has finished registering
    fn on_all_registered(&self, _category_type: &str, _count: usize) -> ListenerResult {
        Ok(())
    }
}
