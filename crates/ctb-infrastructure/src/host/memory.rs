//! In-memory host container
//!
//! A minimal service collection usable as the host side of the bridge in
//! applications that have no full DI framework, and in tests. Follows the
//! usual container convention for multiply-registered types: single
//! resolution returns the last added instance, multi resolution returns
//! all of them in insertion order.

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;

use ctb_domain::ports::{HostContainer, ServiceInstance};
use ctb_domain::value_objects::ServiceKey;

/// Thread-safe in-memory host container
#[derive(Default)]
pub struct MemoryHostContainer {
    services: DashMap<TypeId, Vec<ServiceInstance>>,
}

impl MemoryHostContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance for its own type
    pub fn add<T: Send + Sync + 'static>(&self, value: T) {
        self.add_shared(Arc::new(value));
    }

    /// Add an already-shared instance for its own type
    pub fn add_shared<T: Send + Sync + 'static>(&self, value: Arc<T>) {
        self.services
            .entry(TypeId::of::<T>())
            .or_default()
            .push(value as ServiceInstance);
    }
}

impl HostContainer for MemoryHostContainer {
    fn resolve_one(&self, key: &ServiceKey) -> Option<ServiceInstance> {
        self.services
            .get(&key.id())
            .and_then(|entries| entries.value().last().cloned())
    }

    fn resolve_all(&self, key: &ServiceKey) -> Vec<ServiceInstance> {
        self.services
            .get(&key.id())
            .map(|entries| entries.value().clone())
            .unwrap_or_default()
    }
}
