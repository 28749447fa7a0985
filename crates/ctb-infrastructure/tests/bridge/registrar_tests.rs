//! Tests for the registration table
//!
//! Registration order, the erased registration surface, and safety under
//! concurrent registration from multiple configuration sources.

use std::sync::Arc;

use ctb_domain::ports::{TypeRegistrar, TypeResolver};
use ctb_domain::value_objects::{ServiceKey, TypeRequest};
use ctb_infrastructure::bridge::{RegistrarExt, ResolverExt};

use super::{Greeting, bridge};

#[test]
fn registrations_keep_per_key_insertion_order() {
    let bridge = bridge();
    bridge.register_value(Greeting("first")).unwrap();
    bridge.register_value(Greeting("second")).unwrap();
    bridge.register_value(Greeting("third")).unwrap();

    let all = bridge.resolve_collection::<Greeting>().unwrap();
    let names: Vec<&str> = all.iter().map(|g| g.0).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn erased_surface_registers_and_resolves() {
    let bridge = bridge();
    bridge
        .register_instance(ServiceKey::of::<Greeting>(), Arc::new(Greeting("erased")))
        .unwrap();

    let resolved = bridge
        .resolve(&TypeRequest::one::<Greeting>())
        .unwrap()
        .expect("instance");
    let greeting = resolved.downcast::<Greeting>().expect("concrete type");
    assert_eq!(greeting.0, "erased");
}

#[test]
fn concurrent_registration_loses_no_entries() {
    let bridge = Arc::new(bridge());

    std::thread::scope(|scope| {
        for thread in 0..8_u32 {
            let bridge = Arc::clone(&bridge);
            scope.spawn(move || {
                for i in 0..100_u32 {
                    bridge.register_value(thread * 100 + i).unwrap();
                }
            });
        }
    });

    let all = bridge.resolve_collection::<u32>().unwrap();
    assert_eq!(all.len(), 800);
}

#[test]
fn concurrent_registration_keeps_each_threads_order() {
    let bridge = Arc::new(bridge());

    std::thread::scope(|scope| {
        for thread in 0..4_u32 {
            let bridge = Arc::clone(&bridge);
            scope.spawn(move || {
                for i in 0..50_u32 {
                    bridge.register_value((thread, i)).unwrap();
                }
            });
        }
    });

    let all = bridge.resolve_collection::<(u32, u32)>().unwrap();
    assert_eq!(all.len(), 200);

    // Entries from different threads interleave, but each thread's own
    // entries must appear in the order it appended them.
    for thread in 0..4_u32 {
        let sequence: Vec<u32> = all
            .iter()
            .filter(|entry| entry.0 == thread)
            .map(|entry| entry.1)
            .collect();
        assert_eq!(sequence, (0..50).collect::<Vec<_>>());
    }
}

#[test]
fn build_returns_a_resolver_over_the_same_table() {
    let bridge = Arc::new(bridge());
    bridge.register_value(Greeting("built")).unwrap();

    let resolver: Arc<dyn TypeResolver> = Arc::clone(&bridge).build();
    let resolved = resolver.resolve_required::<Greeting>().unwrap();
    assert_eq!(resolved.0, "built");
}
