//! Public API for the dependency-injection container

pub use crate::container::error::{ContainerError, ContainerResult};
pub use crate::container::service_container::{Container, Factory, Instance, ServiceContainer};
