//! Naming conventions
//!
//! Categories come from provider names (`FieldTypeServiceProvider` ->
//! `field-type`, folder `field-types`). Class identities come from the
//! category type and the addon's directory name, with the addon name echoed
//! twice: once as a namespace segment and once in the class name.

use crate::addon::error::{AddonError, AddonResult};
use crate::addon::types::{AddonIdentity, ClassIdentity};
use crate::core::strings::{kebab_case, pluralize, studly_case};
use serde::Serialize;

/// Suffix every addon provider name carries
pub const PROVIDER_SUFFIX: &str = "ServiceProvider";

/// Namespace all addon classes live under
pub const DEFAULT_NAMESPACE_ROOT: &str = "Anomaly\\Streams\\Addon";

/// Prefix of the default abstract key
pub const ABSTRACT_KEY_PREFIX: &str = "streams";

/// An addon category and the folder its addons live in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonCategory {
    category_type: String,
    folder: String,
}

impl AddonCategory {
    /// Derive from a provider name. Any leading namespace (`\` or `::`
    /// separated) is ignored.
    pub fn from_provider_name(provider: &str) -> AddonResult<Self> {
        let short = provider
            .rsplit(['\\', ':'])
            .next()
            .unwrap_or(provider)
            .trim();

        let stem = short
            .strip_suffix(PROVIDER_SUFFIX)
            .ok_or_else(|| AddonError::InvalidProviderName {
                name: provider.to_string(),
                reason: format!("missing '{}' suffix", PROVIDER_SUFFIX),
            })?;

        if stem.is_empty() {
            return Err(AddonError::InvalidProviderName {
                name: provider.to_string(),
                reason: "nothing precedes the provider suffix".to_string(),
            });
        }

        Ok(Self::from_type(&kebab_case(stem)))
    }

    /// Use a category type as given (`field_type`, `block`)
    pub fn from_type(category_type: &str) -> Self {
        Self {
            category_type: category_type.to_string(),
            folder: pluralize(category_type),
        }
    }

    pub fn category_type(&self) -> &str {
        &self.category_type
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }
}

/// Builds namespaces and class identities under a fixed root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    root: String,
}

impl NamingConvention {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.trim_end_matches('\\').to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `<root>\<Type>\<Slug>`
    pub fn namespace(&self, category_type: &str, slug: &str) -> String {
        format!(
            "{}\\{}\\{}",
            self.root,
            studly_case(category_type),
            studly_case(slug)
        )
    }

    /// `<root>\<Type>\<Slug>\<Slug><Type>`
    pub fn class_identity(&self, category_type: &str, slug: &str) -> ClassIdentity {
        ClassIdentity::new(format!(
            "{}\\{}{}",
            self.namespace(category_type, slug),
            studly_case(slug),
            studly_case(category_type)
        ))
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE_ROOT)
    }
}

/// `streams.<type>.<slug>`; addons may publish under a different key
pub fn default_abstract_key(identity: &AddonIdentity) -> String {
    format!(
        "{}.{}.{}",
        ABSTRACT_KEY_PREFIX, identity.category_type, identity.slug
    )
}
