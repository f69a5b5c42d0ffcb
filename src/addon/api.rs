//! Public API for the addon system
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Bootstrap context and providers
pub use crate::addon::context::Application;
pub use crate::addon::provider::AddonServiceProvider;
pub use crate::addon::settings::{AddonSettings, DEFAULT_PROVIDERS};

// Components of a registration pass
pub use crate::addon::announcer::EventAnnouncer;
pub use crate::addon::binder::AddonBinder;
pub use crate::addon::loader::{AddonLoader, LoadedAddon, SourceRootMap};
pub use crate::addon::search_path::{compile_excludes, AddonRegistry, DirectoryLister, FsLister};

// Class table and compile-time registration
pub use crate::addon::class_table::{AddonClass, AddonClassTable, AddonFactory};

// Naming conventions
pub use crate::addon::naming::{
    default_abstract_key, AddonCategory, NamingConvention, ABSTRACT_KEY_PREFIX,
    DEFAULT_NAMESPACE_ROOT, PROVIDER_SUFFIX,
};

// Addon traits and data
pub use crate::addon::error::{AddonError, AddonResult};
pub use crate::addon::traits::{Addon, AddonRef, AsAnyAddon, ServiceProvider};
pub use crate::addon::types::{
    AddonDescriptor, AddonIdentity, BindingMode, ClassIdentity, DiscoveredPath, ProviderState,
    RegistrationSummary, SearchPath, Tier,
};

// Builtin addons
pub use crate::addon::builtin::{BlockPresenter, HtmlBlock, TextFieldType};
