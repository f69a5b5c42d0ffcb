//! Tests for the service container

use super::api::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct Counter(usize);

fn counting_factory(calls: Arc<AtomicUsize>) -> Factory {
    Box::new(move |_: &ServiceContainer| {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Counter(n)) as Instance)
    })
}

#[test]
fn test_make_unbound_key_fails() {
    let container = ServiceContainer::new();
    let err = container.make("missing").unwrap_err();
    assert_eq!(
        err,
        ContainerError::NotBound {
            key: "missing".to_string()
        }
    );
}

#[test]
fn test_shared_binding_runs_factory_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut container = ServiceContainer::new();
    container.bind("counter", counting_factory(calls.clone()), true);

    let first = container.make_as::<Counter>("counter").unwrap();
    let second = container.make_as::<Counter>("counter").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(container.is_shared("counter"), Some(true));
}

#[test]
fn test_unshared_binding_runs_factory_each_time() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut container = ServiceContainer::new();
    container.bind("counter", counting_factory(calls.clone()), false);

    let first = container.make_as::<Counter>("counter").unwrap();
    let second = container.make_as::<Counter>("counter").unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.0, 0);
    assert_eq!(second.0, 1);
}

#[test]
fn test_rebinding_replaces_previous_binding() {
    let mut container = ServiceContainer::new();
    let replaced = container.instance("greeting", Arc::new("first".to_string()));
    assert!(!replaced);

    let replaced = container.instance("greeting", Arc::new("second".to_string()));
    assert!(replaced);

    let value = container.make_as::<String>("greeting").unwrap();
    assert_eq!(value.as_str(), "second");
    assert_eq!(container.len(), 1);
}

#[test]
fn test_type_mismatch_is_reported() {
    let mut container = ServiceContainer::new();
    container.instance("number", Arc::new(42u32));

    let err = container.make_as::<String>("number").unwrap_err();
    assert!(matches!(err, ContainerError::TypeMismatch { ref key, .. } if key == "number"));
}

#[test]
fn test_factory_can_resolve_dependencies() {
    let mut container = ServiceContainer::new();
    container.instance("prefix", Arc::new("streams".to_string()));
    container.singleton(
        "label",
        Box::new(|c: &ServiceContainer| {
            let prefix = c.make_as::<String>("prefix")?;
            Ok(Arc::new(format!("{}.label", prefix)) as Instance)
        }),
    );

    let label = container.make_as::<String>("label").unwrap();
    assert_eq!(label.as_str(), "streams.label");
}

#[test]
fn test_circular_dependency_detected() {
    let mut container = ServiceContainer::new();
    container.singleton("a", Box::new(|c: &ServiceContainer| c.make("b")));
    container.singleton("b", Box::new(|c: &ServiceContainer| c.make("a")));

    let err = container.make("a").unwrap_err();
    match err {
        ContainerError::CircularDependency { key, chain } => {
            assert_eq!(key, "a");
            assert_eq!(chain, "a -> b -> a");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The failed resolution must not leave the stack dirty
    container.instance("a", Arc::new(1u8));
    assert!(container.make("b").is_ok());
}

#[test]
fn test_keys_sorted() {
    let mut container = ServiceContainer::new();
    container.instance("zeta", Arc::new(()));
    container.instance("alpha", Arc::new(()));
    assert_eq!(container.keys(), vec!["alpha", "zeta"]);
    assert!(container.bound("alpha"));
    assert!(!container.bound("beta"));
}
