//! Container Error Types

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContainerError {
    #[error("No binding registered for '{key}'")]
    NotBound { key: String },

    #[error("Binding '{key}' does not hold a value of type {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("Circular dependency while resolving '{key}' (chain: {chain})")]
    CircularDependency { key: String, chain: String },

    #[error("Factory for '{key}' failed: {message}")]
    FactoryFailed { key: String, message: String },
}

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

impl crate::core::error_handling::ContextualError for ContainerError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
