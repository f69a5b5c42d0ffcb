//! Event types for the notification system

use crate::addon::types::AddonDescriptor;
use std::time::SystemTime;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum AddonEventType {
    Registered,
    AllRegistered,
}

/// Addon lifecycle event
#[derive(Clone, Debug)]
pub enum AddonEvent {
    /// One addon has been bound
    Registered {
        descriptor: AddonDescriptor,
        timestamp: SystemTime,
    },
    /// A category pass finished; `count` addons were bound
    AllRegistered {
        category_type: String,
        count: usize,
        timestamp: SystemTime,
    },
}

impl AddonEvent {
    pub fn registered(descriptor: AddonDescriptor) -> Self {
        AddonEvent::Registered {
            descriptor,
            timestamp: SystemTime::now(),
        }
    }

    pub fn all_registered(category_type: &str, count: usize) -> Self {
        AddonEvent::AllRegistered {
            category_type: category_type.to_string(),
            count,
            timestamp: SystemTime::now(),
        }
    }

    pub fn event_type(&self) -> AddonEventType {
        match self {
            AddonEvent::Registered { .. } => AddonEventType::Registered,
            AddonEvent::AllRegistered { .. } => AddonEventType::AllRegistered,
        }
    }

    pub fn timestamp(&self) -> SystemTime {
        match self {
            AddonEvent::Registered { timestamp, .. } | AddonEvent::AllRegistered { timestamp, .. } => {
                *timestamp
            }
        }
    }
}
