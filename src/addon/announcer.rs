//! Registration announcements
//!
//! Each announcement resolves to the number of listeners reached, or to a
//! `NotificationError` naming the listeners that failed. Failures never undo
//! the registration being announced.

use crate::addon::types::AddonDescriptor;
use crate::notifications::api::{AddonEvent, AddonEventType, NotificationError, NotificationManager};

pub struct EventAnnouncer<'a> {
    bus: &'a NotificationManager,
}

impl<'a> EventAnnouncer<'a> {
    pub fn new(bus: &'a NotificationManager) -> Self {
        Self { bus }
    }

    pub fn announce_registered(&self, descriptor: &AddonDescriptor) -> Result<usize, NotificationError> {
        log::trace!("Announcing registration of '{}'", descriptor.abstract_key);
        self.bus
            .publish(&AddonEvent::registered(descriptor.clone()))
            .into_result(AddonEventType::Registered)
    }

    pub fn announce_all_registered(
        &self,
        category_type: &str,
        count: usize,
    ) -> Result<usize, NotificationError> {
        log::debug!("All {} {} addon(s) registered", count, category_type);
        self.bus
            .publish(&AddonEvent::all_registered(category_type, count))
            .into_result(AddonEventType::AllRegistered)
    }
}
