//! Keyed service container
//!
//! Bindings are factories stored under an abstract key. Shared bindings cache
//! the first instance they produce; non-shared bindings run the factory on
//! every `make`. Binding a key that already exists replaces it.

use crate::container::error::{ContainerError, ContainerResult};
use once_cell::unsync::OnceCell;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// A resolved service
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Produces an instance, with access to the container for dependencies
pub type Factory = Box<dyn Fn(&ServiceContainer) -> ContainerResult<Instance>>;

/// Bind and resolve operations used by addon registration
pub trait Container {
    /// Register `factory` under `key`. Returns true when an earlier binding
    /// was replaced.
    fn bind(&mut self, key: &str, factory: Factory, shared: bool) -> bool;

    /// Resolve the instance bound under `key`
    fn make(&self, key: &str) -> ContainerResult<Instance>;

    /// Whether anything is bound under `key`
    fn bound(&self, key: &str) -> bool;
}

struct Binding {
    factory: Factory,
    shared: bool,
    instance: OnceCell<Instance>,
}

/// Default container implementation
pub struct ServiceContainer {
    bindings: HashMap<String, Binding>,
    /// Keys currently being resolved, innermost last
    resolving: RefCell<Vec<String>>,
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("bindings", &self.keys())
            .finish()
    }
}

impl ServiceContainer {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            resolving: RefCell::new(Vec::new()),
        }
    }

    /// Bind a shared factory; the first `make` result is cached
    pub fn singleton(&mut self, key: &str, factory: Factory) -> bool {
        self.bind(key, factory, true)
    }

    /// Bind an already constructed value
    pub fn instance(&mut self, key: &str, value: Instance) -> bool {
        let cached = value.clone();
        let replaced = self.bind(key, Box::new(move |_: &ServiceContainer| Ok(value.clone())), true);
        if let Some(binding) = self.bindings.get(key) {
            let _ = binding.instance.set(cached);
        }
        replaced
    }

    /// Resolve and downcast to a concrete type
    pub fn make_as<T: Any + Send + Sync>(&self, key: &str) -> ContainerResult<Arc<T>> {
        self.make(key)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                key: key.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Whether the binding under `key` is shared
    pub fn is_shared(&self, key: &str) -> Option<bool> {
        self.bindings.get(key).map(|b| b.shared)
    }

    /// All bound keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.bindings.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn build(&self, key: &str, binding: &Binding) -> ContainerResult<Instance> {
        {
            let mut resolving = self.resolving.borrow_mut();
            if resolving.iter().any(|k| k == key) {
                let mut chain = resolving.clone();
                chain.push(key.to_string());
                return Err(ContainerError::CircularDependency {
                    key: key.to_string(),
                    chain: chain.join(" -> "),
                });
            }
            resolving.push(key.to_string());
        }

        let result = (binding.factory)(self);
        self.resolving.borrow_mut().pop();
        result
    }
}

impl Container for ServiceContainer {
    fn bind(&mut self, key: &str, factory: Factory, shared: bool) -> bool {
        log::trace!("Binding '{}' (shared: {})", key, shared);
        self.bindings
            .insert(
                key.to_string(),
                Binding {
                    factory,
                    shared,
                    instance: OnceCell::new(),
                },
            )
            .is_some()
    }

    fn make(&self, key: &str) -> ContainerResult<Instance> {
        let binding = self
            .bindings
            .get(key)
            .ok_or_else(|| ContainerError::NotBound {
                key: key.to_string(),
            })?;

        if binding.shared {
            binding
                .instance
                .get_or_try_init(|| self.build(key, binding))
                .cloned()
        } else {
            self.build(key, binding)
        }
    }

    fn bound(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
