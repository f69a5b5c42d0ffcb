//! Notification manager
//!
//! Keeps one observer list per lifecycle phase and delivers events
//! synchronously, in subscription order. Delivery is fire-and-forget: a
//! failing listener is logged and reported, and the remaining listeners still
//! run.

use crate::notifications::error::NotificationError;
use crate::notifications::event::{AddonEvent, AddonEventType};
use crate::notifications::traits::AddonListener;
use std::sync::Arc;

/// Result of delivering one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub delivered: usize,
    /// `(listener_id, error message)` for each failed callback
    pub failed: Vec<(String, String)>,
}

impl PublishReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Delivered count, or the failed listeners as an error
    pub fn into_result(self, event_type: AddonEventType) -> Result<usize, NotificationError> {
        if self.is_clean() {
            Ok(self.delivered)
        } else {
            Err(NotificationError::DeliveryFailed {
                event_type,
                failed_listeners: self.failed.into_iter().map(|(id, _)| id).collect(),
            })
        }
    }
}

#[derive(Default)]
pub struct NotificationManager {
    on_registered: Vec<Arc<dyn AddonListener>>,
    on_all_registered: Vec<Arc<dyn AddonListener>>,
}

impl std::fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = |list: &[Arc<dyn AddonListener>]| {
            list.iter()
                .map(|l| l.listener_id().to_string())
                .collect::<Vec<_>>()
        };
        f.debug_struct("NotificationManager")
            .field("on_registered", &ids(&self.on_registered))
            .field("on_all_registered", &ids(&self.on_all_registered))
            .finish()
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every lifecycle phase
    pub fn subscribe(&mut self, listener: Arc<dyn AddonListener>) {
        log::debug!("Subscribing listener '{}' to all addon events", listener.listener_id());
        self.on_registered.push(listener.clone());
        self.on_all_registered.push(listener);
    }

    /// Subscribe to a single lifecycle phase
    pub fn subscribe_to(&mut self, event_type: AddonEventType, listener: Arc<dyn AddonListener>) {
        log::debug!(
            "Subscribing listener '{}' to {} events",
            listener.listener_id(),
            event_type
        );
        self.listeners_mut(event_type).push(listener);
    }

    /// Remove a listener from every phase; returns how many entries were removed
    pub fn unsubscribe(&mut self, listener_id: &str) -> usize {
        let before = self.on_registered.len() + self.on_all_registered.len();
        self.on_registered.retain(|l| l.listener_id() != listener_id);
        self.on_all_registered.retain(|l| l.listener_id() != listener_id);
        before - (self.on_registered.len() + self.on_all_registered.len())
    }

    pub fn listener_count(&self, event_type: AddonEventType) -> usize {
        self.listeners(event_type).len()
    }

    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.on_registered
            .iter()
            .chain(self.on_all_registered.iter())
            .any(|l| l.listener_id() == listener_id)
    }

    /// Deliver `event` to every listener of its phase
    pub fn publish(&self, event: &AddonEvent) -> PublishReport {
        let event_type = event.event_type();
        let mut report = PublishReport::default();

        for listener in self.listeners(event_type) {
            let outcome = match event {
                AddonEvent::Registered { descriptor, .. } => listener.on_registered(descriptor),
                AddonEvent::AllRegistered {
                    category_type,
                    count,
                    ..
                } => listener.on_all_registered(category_type, *count),
            };

            match outcome {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    log::warn!(
                        "Listener '{}' failed handling {}: {}",
                        listener.listener_id(),
                        event_type,
                        e
                    );
                    report
                        .failed
                        .push((listener.listener_id().to_string(), e.to_string()));
                }
            }
        }

        log::trace!(
            "Published {} to {} listener(s), {} failed",
            event_type,
            report.delivered + report.failed.len(),
            report.failed.len()
        );
        report
    }

    fn listeners(&self, event_type: AddonEventType) -> &[Arc<dyn AddonListener>] {
        match event_type {
            AddonEventType::Registered => &self.on_registered,
            AddonEventType::AllRegistered => &self.on_all_registered,
        }
    }

    fn listeners_mut(&mut self, event_type: AddonEventType) -> &mut Vec<Arc<dyn AddonListener>> {
        match event_type {
            AddonEventType::Registered => &mut self.on_registered,
            AddonEventType::AllRegistered => &mut self.on_all_registered,
        }
    }
}
