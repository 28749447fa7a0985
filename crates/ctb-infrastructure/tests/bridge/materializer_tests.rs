//! Tests for collection materialization
//!
//! Ordering (local registrations then host instances), duplicates, empty
//! sequences, and the concrete runtime type of materialized collections.

use std::sync::Arc;

use ctb_domain::error::Result;
use ctb_domain::ports::{Injectable, TypeRegistrar, TypeResolver};
use ctb_domain::value_objects::TypeRequest;
use ctb_infrastructure::bridge::{RegistrarExt, ResolverExt};
use ctb_infrastructure::host::MemoryHostContainer;

use super::{Greeting, bridge, bridge_with_host};

#[test]
fn local_registrations_precede_host_instances() {
    let host = MemoryHostContainer::new();
    host.add(Greeting("e3"));

    let bridge = bridge_with_host(host);
    bridge.register_value(Greeting("e1")).unwrap();
    bridge.register_value(Greeting("e2")).unwrap();

    let all = bridge.resolve_collection::<Greeting>().unwrap();
    let names: Vec<&str> = all.iter().map(|g| g.0).collect();
    assert_eq!(names, vec!["e1", "e2", "e3"]);
}

#[test]
fn all_registration_kinds_participate_in_order() {
    struct Step(&'static str);

    impl Injectable for Step {
        fn inject(_resolver: &dyn TypeResolver) -> Result<Self> {
            Ok(Self("by-type"))
        }
    }

    let bridge = bridge();
    bridge.register_value(Step("by-instance")).unwrap();
    bridge.register_type::<Step, Step>().unwrap();
    bridge.register_factory(|| Step("by-factory")).unwrap();

    let all = bridge.resolve_collection::<Step>().unwrap();
    let names: Vec<&str> = all.iter().map(|s| s.0).collect();
    assert_eq!(names, vec!["by-instance", "by-type", "by-factory"]);
}

#[test]
fn empty_collection_is_a_valid_typed_sequence() {
    let bridge = bridge();

    // The raw resolution must yield a sequence value, not absence.
    let sequence = bridge
        .resolve(&TypeRequest::all::<Greeting>())
        .unwrap()
        .expect("collection requests always produce a sequence");
    let vec = sequence
        .downcast::<Vec<Arc<Greeting>>>()
        .expect("concretely-typed sequence");
    assert!(vec.is_empty());
}

#[test]
fn single_request_for_unregistered_type_is_absent_not_empty() {
    let bridge = bridge();
    assert!(bridge.resolve(&TypeRequest::one::<Greeting>()).unwrap().is_none());
}

#[test]
fn materialized_sequence_has_the_concrete_runtime_type() {
    let bridge = bridge();
    bridge.register_value(Greeting("typed")).unwrap();

    let sequence = bridge
        .resolve(&TypeRequest::all::<Greeting>())
        .unwrap()
        .expect("sequence");

    // The consumer's runtime type check: a Vec of the element type, not
    // an erased container.
    let vec = sequence
        .downcast::<Vec<Arc<Greeting>>>()
        .expect("concretely-typed sequence");
    assert_eq!(vec.len(), 1);
    assert_eq!(vec[0].0, "typed");
}

#[test]
fn instances_visible_on_both_sides_appear_twice() {
    let shared = Arc::new(Greeting("both"));

    let host = MemoryHostContainer::new();
    host.add_shared(Arc::clone(&shared));

    let bridge = bridge_with_host(host);
    bridge
        .register_instance(
            ctb_domain::value_objects::ServiceKey::of::<Greeting>(),
            shared.clone(),
        )
        .unwrap();

    let all = bridge.resolve_collection::<Greeting>().unwrap();
    assert_eq!(all.len(), 2);
    assert!(Arc::ptr_eq(&all[0], &all[1]));
}

#[test]
fn repeated_collection_requests_reuse_the_synthesized_type() {
    let bridge = bridge();
    bridge.register_value(Greeting("cached")).unwrap();

    for _ in 0..2 {
        let sequence = bridge
            .resolve(&TypeRequest::all::<Greeting>())
            .unwrap()
            .expect("sequence");
        assert!(sequence.downcast::<Vec<Arc<Greeting>>>().is_ok());
    }
}

#[test]
fn concurrent_collection_requests_converge() {
    struct Parallel;

    let bridge = Arc::new(bridge());
    bridge.register_value(Parallel).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let bridge = Arc::clone(&bridge);
            scope.spawn(move || {
                let all = bridge.resolve_collection::<Parallel>().unwrap();
                assert_eq!(all.len(), 1);
            });
        }
    });
}
