//! Collection materializer
//!
//! Answers collection requests by synthesizing a concretely-typed
//! `Vec<Arc<T>>` and populating it with the bridge's own registrations
//! (insertion order) followed by the host container's instances
//! (container order). No de-duplication: an instance registered locally
//! and independently discoverable through the host appears twice, and
//! callers may rely on those positional semantics.
//!
//! The synthesis operations are cached process-wide per element type,
//! shared across all bridge instances. First use wins; the cache is never
//! evicted.

use std::any::TypeId;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use ctb_domain::error::Result;
use ctb_domain::ports::{HostContainer, ServiceInstance, TypeResolver};
use ctb_domain::value_objects::{SequenceVtable, ServiceKey};

use crate::bridge::registration::Registration;

/// Process-wide synthesis cache, keyed by element type
static SEQUENCE_VTABLES: LazyLock<DashMap<TypeId, SequenceVtable>> = LazyLock::new(DashMap::new);

/// Get-or-create the cached synthesis operations for an element type
///
/// Concurrent first-use races converge on a single entry; the seed vtable
/// from a losing caller is discarded. Vtables for the same element type
/// are interchangeable, so which caller wins is unobservable.
pub(crate) fn vtable_for(element: &ServiceKey, seed: SequenceVtable) -> SequenceVtable {
    *SEQUENCE_VTABLES.entry(element.id()).or_insert(seed)
}

/// Materialize the concretely-typed sequence for a collection request
pub(crate) fn materialize(
    element: &ServiceKey,
    seed: SequenceVtable,
    local: &[Registration],
    host: &dyn HostContainer,
    resolver: &dyn TypeResolver,
) -> Result<ServiceInstance> {
    let vtable = vtable_for(element, seed);
    let mut sequence = (vtable.make)();

    for registration in local {
        let value = registration.realize(host, resolver)?;
        (vtable.push)(sequence.as_mut(), value)?;
    }

    for value in host.resolve_all(element) {
        (vtable.push)(sequence.as_mut(), value)?;
    }

    tracing::trace!(element = %element, "materialized service collection");
    Ok(Arc::from(sequence))
}
