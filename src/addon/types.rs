//! Type definitions for addon discovery and registration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Discovery precedence level. Iteration order is precedence order: later
/// tiers can override bindings made by earlier ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Core,
    Shared,
    Application,
}

/// How an addon is published into the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingMode {
    /// Every resolution yields the instance built during bootstrap
    #[default]
    Singleton,
    /// Every resolution constructs a fresh instance
    Transient,
}

impl BindingMode {
    pub fn is_shared(self) -> bool {
        matches!(self, BindingMode::Singleton)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "singleton" | "shared" => Some(BindingMode::Singleton),
            "transient" | "bind" => Some(BindingMode::Transient),
            _ => None,
        }
    }
}

/// Fully qualified addon class name, e.g.
/// `Anomaly\Streams\Addon\FieldType\Text\TextFieldType`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClassIdentity(String);

impl ClassIdentity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassIdentity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The three discovery roots. A `None` root is skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    pub core: Option<PathBuf>,
    pub shared: Option<PathBuf>,
    pub application: Option<PathBuf>,
}

impl SearchPath {
    /// Standard layout under `base`: `core/`, `addons/shared/` and
    /// `addons/<application>/`. Without an application reference the
    /// application tier is left out.
    pub fn from_base(base: &Path, application: Option<&str>) -> Self {
        Self {
            core: Some(base.join("core")),
            shared: Some(base.join("addons").join("shared")),
            application: application
                .filter(|a| !a.is_empty())
                .map(|a| base.join("addons").join(a)),
        }
    }

    pub fn root(&self, tier: Tier) -> Option<&Path> {
        match tier {
            Tier::Core => self.core.as_deref(),
            Tier::Shared => self.shared.as_deref(),
            Tier::Application => self.application.as_deref(),
        }
    }

    /// Configured roots in precedence order
    pub fn roots(&self) -> impl Iterator<Item = (Tier, &Path)> + '_ {
        Tier::iter().filter_map(move |tier| self.root(tier).map(|root| (tier, root)))
    }
}

/// A directory found while scanning one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPath {
    pub tier: Tier,
    pub path: PathBuf,
}

/// Everything derived from an addon's directory before it is constructed.
/// Factories receive this so an addon knows where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonIdentity {
    pub slug: String,
    pub category_type: String,
    pub namespace: String,
    pub class_identity: ClassIdentity,
    pub path: PathBuf,
    pub source_root: PathBuf,
    pub tier: Tier,
}

/// A bound addon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonDescriptor {
    #[serde(flatten)]
    pub identity: AddonIdentity,
    pub abstract_key: String,
}

impl AddonDescriptor {
    pub fn slug(&self) -> &str {
        &self.identity.slug
    }

    pub fn category_type(&self) -> &str {
        &self.identity.category_type
    }

    pub fn tier(&self) -> Tier {
        self.identity.tier
    }
}

/// Registration lifecycle of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum ProviderState {
    Idle,
    ResolvingPaths,
    Loading,
    Binding,
    Announced,
    AllAnnounced,
    Done,
    Failed,
}

/// Outcome of a completed category pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    pub provider: String,
    pub category_type: String,
    pub folder: String,
    /// Abstract keys in registration order
    pub registered: Vec<String>,
    /// Listener callbacks that returned an error while announcing
    pub listener_failures: usize,
}
