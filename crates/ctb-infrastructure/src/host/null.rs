//! Host container that resolves nothing
//!
//! Null object for configurations where every service is registered
//! directly against the bridge, and for tests exercising the
//! empty-container paths.

use ctb_domain::ports::{HostContainer, ServiceInstance};
use ctb_domain::value_objects::ServiceKey;

/// Host container with no registrations
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHostContainer;

impl NullHostContainer {
    /// Create a null host container
    pub fn new() -> Self {
        Self
    }
}

impl HostContainer for NullHostContainer {
    fn resolve_one(&self, _key: &ServiceKey) -> Option<ServiceInstance> {
        None
    }

    fn resolve_all(&self, _key: &ServiceKey) -> Vec<ServiceInstance> {
        Vec::new()
    }
}
