//! Addon Error Types
//!
//! Every variant except `AlreadyRegistered` and `NotBound` is fatal for the
//! category pass that raised it: registration never continues with a partial
//! addon set.

use crate::container::api::ContainerError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AddonError {
    #[error("Invalid provider name '{name}': {reason}")]
    InvalidProviderName { name: String, reason: String },

    #[error("Invalid exclude pattern '{pattern}': {cause}")]
    InvalidExcludePattern { pattern: String, cause: String },

    #[error("Failed to list addon directories in {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Addon '{slug}' has no source directory at {}", .source_root.display())]
    MissingSourceRoot { slug: String, source_root: PathBuf },

    #[error("Addon class {class} for '{slug}' is not registered (expected under {})", .expected.display())]
    UnresolvedClass {
        class: String,
        slug: String,
        expected: PathBuf,
    },

    #[error("Failed to construct addon {class}: {cause}")]
    ConstructionFailed { class: String, cause: String },

    #[error("Service provider '{provider}' of addon '{slug}' failed: {source}")]
    ProviderFailed {
        provider: String,
        slug: String,
        source: Box<AddonError>,
    },

    #[error("Addons of type '{category_type}' have already been registered")]
    AlreadyRegistered { category_type: String },

    #[error("No addon bound under '{key}'")]
    NotBound { key: String },

    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// Result type for addon operations
pub type AddonResult<T> = Result<T, AddonError>;

impl crate::core::error_handling::ContextualError for AddonError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            AddonError::InvalidProviderName { .. }
                | AddonError::InvalidExcludePattern { .. }
                | AddonError::MissingSourceRoot { .. }
                | AddonError::UnresolvedClass { .. }
                | AddonError::AlreadyRegistered { .. }
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            AddonError::InvalidProviderName { .. } => {
                Some("provider names must end in 'ServiceProvider', e.g. FieldTypeServiceProvider")
            }
            AddonError::InvalidExcludePattern { .. } => {
                Some("an exclude entry is not a valid glob pattern")
            }
            AddonError::MissingSourceRoot { .. } => {
                Some("an addon directory is missing its src/ folder")
            }
            AddonError::UnresolvedClass { .. } => {
                Some("an addon directory has no matching compiled-in addon class")
            }
            AddonError::AlreadyRegistered { .. } => {
                Some("the same addon provider was configured more than once")
            }
            _ => None,
        }
    }
}
