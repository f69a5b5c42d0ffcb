//! Error types for the notification system

use crate::notifications::event::AddonEventType;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotificationError {
    #[error(
        "Failed to deliver {event_type} to {} listener(s): {}",
        .failed_listeners.len(),
        .failed_listeners.join(", ")
    )]
    DeliveryFailed {
        event_type: AddonEventType,
        failed_listeners: Vec<String>,
    },
}

impl NotificationError {
    /// Number of listener callbacks that failed
    pub fn failed_count(&self) -> usize {
        match self {
            NotificationError::DeliveryFailed {
                failed_listeners, ..
            } => failed_listeners.len(),
        }
    }
}
