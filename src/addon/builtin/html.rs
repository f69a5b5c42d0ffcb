//! HTML block

use crate::addon::context::Application;
use crate::addon::error::AddonResult;
use crate::addon::traits::{Addon, AddonRef, ServiceProvider};
use crate::addon::types::AddonIdentity;
use crate::container::api::{Instance, ServiceContainer};
use std::sync::Arc;

/// Block addon whose nested provider publishes a presenter for it
#[derive(Debug)]
pub struct HtmlBlock {
    identity: AddonIdentity,
}

impl HtmlBlock {
    pub fn create(identity: &AddonIdentity, _container: &ServiceContainer) -> AddonResult<AddonRef> {
        Ok(Arc::new(Self {
            identity: identity.clone(),
        }))
    }

    /// Key the presenter is bound under
    pub fn presenter_key(&self) -> String {
        format!("{}.presenter", self.abstract_key())
    }
}

impl Addon for HtmlBlock {
    fn identity(&self) -> &AddonIdentity {
        &self.identity
    }

    fn to_service_provider(&self) -> Option<Box<dyn ServiceProvider>> {
        Some(Box::new(HtmlBlockProvider {
            name: format!("{}ServiceProvider", self.identity.class_identity),
            presenter_key: self.presenter_key(),
            slug: self.identity.slug.clone(),
        }))
    }
}

/// Decorates a block for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPresenter {
    pub slug: String,
    pub wrapper: String,
}

impl BlockPresenter {
    pub fn css_class(&self) -> String {
        format!("block block--{}", self.slug)
    }
}

struct HtmlBlockProvider {
    name: String,
    presenter_key: String,
    slug: String,
}

impl ServiceProvider for HtmlBlockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&mut self, app: &mut Application) -> AddonResult<()> {
        let presenter = BlockPresenter {
            slug: self.slug.clone(),
            wrapper: "div".to_string(),
        };
        app.container_mut()
            .instance(&self.presenter_key, Arc::new(presenter) as Instance);
        Ok(())
    }
}

crate::addon_class!(
    "Anomaly\\Streams\\Addon\\Block\\Html\\HtmlBlock",
    HtmlBlock::create
);
