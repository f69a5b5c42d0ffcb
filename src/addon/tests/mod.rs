//! Tests for addon discovery, loading, binding and registration
//!
//! Shared fixtures live here: a minimal addon class, a recording listener and
//! helpers for laying out addon directories in a temporary base path.

mod loader_tests;

use crate::addon::api::*;
use crate::container::api::ServiceContainer;
use crate::notifications::api::{AddonListener, ListenerResult};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub(crate) const WIDGET_PROVIDER: &str = "WidgetServiceProvider";

/// Addon with no capabilities beyond its identity
#[derive(Debug)]
pub(crate) struct TestAddon {
    identity: AddonIdentity,
}

impl TestAddon {
    pub fn create(identity: &AddonIdentity, _container: &ServiceContainer) -> AddonResult<AddonRef> {
        Ok(Arc::new(Self {
            identity: identity.clone(),
        }))
    }
}

impl Addon for TestAddon {
    fn identity(&self) -> &AddonIdentity {
        &self.identity
    }
}

pub(crate) fn failing_factory(
    identity: &AddonIdentity,
    _container: &ServiceContainer,
) -> AddonResult<AddonRef> {
    Err(AddonError::ConstructionFailed {
        class: identity.class_identity.to_string(),
        cause: "database unavailable".to_string(),
    })
}

/// Records every event it receives as a short string
pub(crate) struct RecordingListener {
    id: String,
    fail: bool,
    events: Mutex<Vec<String>>,
}

impl RecordingListener {
    pub fn new(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            fail: false,
            events: Mutex::new(Vec::new()),
        })
    }

    /// Records events but reports failure for each one
    pub fn failing(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            fail: true,
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) -> ListenerResult {
        self.events.lock().unwrap().push(event);
        if self.fail {
            Err(format!("{} rejected the event", self.id).into())
        } else {
            Ok(())
        }
    }
}

impl AddonListener for RecordingListener {
    fn listener_id(&self) -> &str {
        &self.id
    }

    fn on_registered(&self, descriptor: &AddonDescriptor) -> ListenerResult {
        self.record(format!("registered:{}", descriptor.abstract_key))
    }

    fn on_all_registered(&self, category_type: &str, count: usize) -> ListenerResult {
        self.record(format!("all:{}:{}", category_type, count))
    }
}

/// Create `<root>/<folder>/<slug>/src` and return the addon directory
pub(crate) fn addon_dir(root: &Path, folder: &str, slug: &str) -> PathBuf {
    let dir = root.join(folder).join(slug);
    std::fs::create_dir_all(dir.join("src")).unwrap();
    dir
}

/// Class table with a `TestAddon` class for each widget slug
pub(crate) fn widget_classes(slugs: &[&str]) -> AddonClassTable {
    let naming = NamingConvention::default();
    let mut classes = AddonClassTable::new();
    for slug in slugs {
        classes.register(naming.class_identity("widget", slug), TestAddon::create);
    }
    classes
}

/// Application over `base` that knows the given widget classes
pub(crate) fn widget_app(base: &Path, application: Option<&str>, slugs: &[&str]) -> Application {
    let mut settings = AddonSettings::with_base_path(base);
    settings.application = application.map(str::to_string);
    settings.providers = vec![WIDGET_PROVIDER.to_string()];
    Application::new(settings)
        .unwrap()
        .with_classes(widget_classes(slugs))
}
