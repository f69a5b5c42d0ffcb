//! Dependency-injection container
//!
//! Holds keyed factories and the instances they produce. The container is
//! owned by the bootstrap context and passed explicitly; there is no global
//! instance.

// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod service_container;

// Public API module - the only public interface for the container
pub mod api;

#[cfg(test)]
mod tests;
