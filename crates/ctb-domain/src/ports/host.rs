//! Host container contract
//!
//! The host dependency-injection container is an external collaborator:
//! the bridge never replaces it, only shadows and extends it. The bridge
//! falls back to [`resolve_one`](HostContainer::resolve_one) for types it
//! has no local registration for, merges
//! [`resolve_all`](HostContainer::resolve_all) results into collection
//! requests, and routes by-type construction through
//! [`construct`](HostContainer::construct).

use crate::error::Result;
use crate::ports::bridge::{ConstructorFn, ServiceInstance, TypeResolver};
use crate::value_objects::ServiceKey;

/// The host dependency-injection container the bridge shadows
pub trait HostContainer: Send + Sync {
    /// Resolve the container's single instance for a type, if any
    fn resolve_one(&self, key: &ServiceKey) -> Option<ServiceInstance>;

    /// Resolve every instance the container holds for a type, in
    /// container order
    fn resolve_all(&self, key: &ServiceKey) -> Vec<ServiceInstance>;

    /// Construct an instance through the container's injection facility
    ///
    /// `resolver` is the combined bridge view, so constructor arguments
    /// see bridge overrides before the container's own registrations.
    /// The default implementation invokes the captured constructor
    /// directly; containers with their own activation rules may hook it.
    fn construct(
        &self,
        ctor: ConstructorFn,
        resolver: &dyn TypeResolver,
    ) -> Result<ServiceInstance> {
        ctor(resolver)
    }
}
