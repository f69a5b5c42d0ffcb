//! Addon System Module
//!
//! Discovers addon directories across the core, shared and application tiers,
//! constructs each addon from the class table, binds it into the container and
//! announces the result.

// Internal modules - all access should go through api module
pub(crate) mod announcer;
pub(crate) mod binder;
pub(crate) mod builtin;
pub(crate) mod class_table;
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod loader;
pub(crate) mod naming;
pub(crate) mod provider;
pub(crate) mod search_path;
pub(crate) mod settings;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the addon system
pub mod api;

#[cfg(test)]
mod tests;
