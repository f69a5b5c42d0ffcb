//! Tests for source roots and addon construction

use super::{addon_dir, failing_factory, widget_classes};
use crate::addon::api::*;
use crate::container::api::ServiceContainer;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn discovered(path: PathBuf) -> DiscoveredPath {
    DiscoveredPath {
        tier: Tier::Core,
        path,
    }
}

#[test]
fn test_source_root_resolves_by_longest_prefix() {
    let mut roots = SourceRootMap::new();
    roots.add_prefix_root("Acme", Path::new("/src/acme"));
    roots.add_prefix_root("Acme\\Blocks\\", Path::new("/src/blocks"));

    assert_eq!(
        roots.resolve("Acme\\Blocks\\Html\\HtmlBlock"),
        Some(PathBuf::from("/src/blocks/Html/HtmlBlock"))
    );
    assert_eq!(
        roots.resolve("Acme\\Util"),
        Some(PathBuf::from("/src/acme/Util"))
    );
    assert_eq!(roots.resolve("Other\\Thing"), None);
}

#[test]
fn test_source_root_prefix_is_replaced() {
    let mut roots = SourceRootMap::new();
    roots.add_prefix_root("Acme\\Text", Path::new("/core/text/src"));
    roots.add_prefix_root("Acme\\Text\\", Path::new("/app/text/src"));

    assert_eq!(roots.len(), 1);
    assert_eq!(roots.root_for("Acme\\Text"), Some(Path::new("/app/text/src")));
}

#[test]
fn test_identify_derives_identity_from_directory() {
    let naming = NamingConvention::default();
    let classes = AddonClassTable::new();
    let loader = AddonLoader::new(&naming, &classes, &FsLister);

    let identity = loader.identify("field-type", &discovered(PathBuf::from("/site/core/field-types/text")));

    assert_eq!(identity.slug, "text");
    assert_eq!(identity.category_type, "field-type");
    assert_eq!(identity.namespace, "Anomaly\\Streams\\Addon\\FieldType\\Text");
    assert_eq!(
        identity.class_identity.as_str(),
        "Anomaly\\Streams\\Addon\\FieldType\\Text\\TextFieldType"
    );
    assert_eq!(identity.source_root, PathBuf::from("/site/core/field-types/text/src"));
    assert_eq!(identity.tier, Tier::Core);
}

#[test]
fn test_load_constructs_registered_class() {
    let base = TempDir::new().unwrap();
    let dir = addon_dir(base.path(), "widgets", "alpha");
    let naming = NamingConvention::default();
    let classes = widget_classes(&["alpha"]);
    let mut roots = SourceRootMap::new();

    let loaded = AddonLoader::new(&naming, &classes, &FsLister)
        .load(&mut roots, &ServiceContainer::new(), "widget", &discovered(dir.clone()))
        .unwrap();

    assert_eq!(loaded.identity.slug, "alpha");
    assert_eq!(loaded.addon.identity().path, dir);
    assert_eq!(loaded.addon.abstract_key(), "streams.widget.alpha");
    assert_eq!(
        roots.root_for("Anomaly\\Streams\\Addon\\Widget\\Alpha"),
        Some(dir.join("src").as_path())
    );
}

#[test]
fn test_source_root_registered_before_class_lookup() {
    let base = TempDir::new().unwrap();
    let dir = addon_dir(base.path(), "widgets", "zeta");
    let naming = NamingConvention::default();
    let classes = AddonClassTable::new();
    let mut roots = SourceRootMap::new();

    let err = AddonLoader::new(&naming, &classes, &FsLister)
        .load(&mut roots, &ServiceContainer::new(), "widget", &discovered(dir.clone()))
        .unwrap_err();

    match err {
        AddonError::UnresolvedClass {
            class,
            slug,
            expected,
        } => {
            assert_eq!(class, "Anomaly\\Streams\\Addon\\Widget\\Zeta\\ZetaWidget");
            assert_eq!(slug, "zeta");
            assert_eq!(expected, dir.join("src").join("ZetaWidget"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(roots.len(), 1);
}

#[test]
fn test_missing_src_directory_is_fatal() {
    let base = TempDir::new().unwrap();
    let dir = base.path().join("widgets").join("alpha");
    std::fs::create_dir_all(&dir).unwrap();
    let naming = NamingConvention::default();
    let classes = widget_classes(&["alpha"]);
    let mut roots = SourceRootMap::new();

    let err = AddonLoader::new(&naming, &classes, &FsLister)
        .load(&mut roots, &ServiceContainer::new(), "widget", &discovered(dir.clone()))
        .unwrap_err();

    assert!(matches!(err, AddonError::MissingSourceRoot { ref slug, .. } if slug == "alpha"));
    assert!(roots.is_empty());
}

#[test]
fn test_factory_failure_is_construction_failure() {
    let base = TempDir::new().unwrap();
    let dir = addon_dir(base.path(), "widgets", "alpha");
    let naming = NamingConvention::default();
    let mut classes = AddonClassTable::new();
    classes.register(naming.class_identity("widget", "alpha"), failing_factory);
    let mut roots = SourceRootMap::new();

    let err = AddonLoader::new(&naming, &classes, &FsLister)
        .load(&mut roots, &ServiceContainer::new(), "widget", &discovered(dir))
        .unwrap_err();

    match err {
        AddonError::ConstructionFailed { class, cause } => {
            assert_eq!(class, "Anomaly\\Streams\\Addon\\Widget\\Alpha\\AlphaWidget");
            assert_eq!(cause, "database unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_builtin_classes_are_collected() {
    let classes = AddonClassTable::with_builtins();
    assert!(classes.contains(&ClassIdentity::new(
        "Anomaly\\Streams\\Addon\\FieldType\\Text\\TextFieldType"
    )));
    assert!(classes.contains(&ClassIdentity::new(
        "Anomaly\\Streams\\Addon\\Block\\Html\\HtmlBlock"
    )));
}

#[test]
fn test_register_replaces_class() {
    let mut classes = widget_classes(&["alpha"]);
    let identity = NamingConvention::default().class_identity("widget", "alpha");
    assert!(classes.register(identity.clone(), failing_factory));
    assert_eq!(classes.len(), 1);
    assert!(classes.contains(&identity));
}
