//! Addon class table
//!
//! Maps class identities to constructor functions. Entries come from two
//! places: classes compiled into the binary through [`addon_class!`], and
//! classes registered on a table at configuration time. A directory whose
//! computed identity is missing from the table fails loudly at load time.

use crate::addon::error::AddonResult;
use crate::addon::traits::AddonRef;
use crate::addon::types::{AddonIdentity, ClassIdentity};
use crate::container::api::ServiceContainer;
use std::collections::HashMap;

/// Constructs an addon; the container is available for shared services
pub type AddonFactory = fn(&AddonIdentity, &ServiceContainer) -> AddonResult<AddonRef>;

/// Compile-time class entry collected by `inventory`
pub struct AddonClass {
    pub class: &'static str,
    pub factory: AddonFactory,
}

inventory::collect!(AddonClass);

/// Register an addon class compiled into the binary
///
/// ```ignore
/// addon_class!("Anomaly\\Streams\\Addon\\FieldType\\Text\\TextFieldType", TextFieldType::create);
/// ```
#[macro_export]
macro_rules! addon_class {
    ($class:expr, $factory:expr) => {
        $crate::inventory::submit!($crate::addon::api::AddonClass {
            class: $class,
            factory: $factory,
        });
    };
}

#[derive(Clone, Default)]
pub struct AddonClassTable {
    entries: HashMap<ClassIdentity, AddonFactory>,
}

impl std::fmt::Debug for AddonClassTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddonClassTable")
            .field("classes", &self.classes())
            .finish()
    }
}

impl AddonClassTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding every class registered with `addon_class!`
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for entry in inventory::iter::<AddonClass> {
            table.register(entry.class, entry.factory);
        }
        log::trace!("Collected {} compiled-in addon classes", table.len());
        table
    }

    /// Add or replace a class; returns true if an entry was replaced
    pub fn register(&mut self, class: impl Into<ClassIdentity>, factory: AddonFactory) -> bool {
        self.entries.insert(class.into(), factory).is_some()
    }

    pub fn resolve(&self, class: &ClassIdentity) -> Option<AddonFactory> {
        self.entries.get(class).copied()
    }

    pub fn contains(&self, class: &ClassIdentity) -> bool {
        self.entries.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered identities, sorted
    pub fn classes(&self) -> Vec<&ClassIdentity> {
        let mut classes: Vec<&ClassIdentity> = self.entries.keys().collect();
        classes.sort();
        classes
    }
}
