//! Type-resolution bridge
//!
//! [`ContainerBridge`] implements both sides of the framework boundary:
//! it accepts registrations ahead of a command invocation and serves
//! resolution requests during execution by combining its own registration
//! table with the host container's lookups. Registrations made against
//! the bridge shadow the host for single-instance requests and are merged
//! ahead of host instances for collection requests.
//!
//! One bridge lives for the duration of one command invocation. It holds
//! a reference to the host container, never ownership of its lifetime.

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;

use ctb_domain::error::Result;
use ctb_domain::ports::{
    ConstructorFn, HostContainer, ServiceFactory, ServiceInstance, TypeRegistrar, TypeResolver,
};
use ctb_domain::value_objects::{ServiceKey, TypeRequest};

/// Typed convenience extensions over the erased boundary
pub mod ext;
mod materializer;
mod registration;

pub use ext::{RegistrarExt, ResolverExt};

use registration::Registration;

/// Bridge between a command-line framework and a host DI container
///
/// Thread-safe: registration and resolution may run concurrently, and
/// by-type construction may recursively resolve further types through the
/// same bridge on the same call stack.
pub struct ContainerBridge {
    /// Registrations made directly against the bridge, insertion order
    /// preserved per service type
    services: DashMap<TypeId, Vec<Registration>>,
    /// The host container consulted for everything the bridge does not
    /// hold locally
    host: Arc<dyn HostContainer>,
}

impl ContainerBridge {
    /// Create a bridge over the given host container
    pub fn new(host: Arc<dyn HostContainer>) -> Self {
        Self {
            services: DashMap::new(),
            host,
        }
    }

    /// The host container this bridge shadows
    pub fn host(&self) -> &Arc<dyn HostContainer> {
        &self.host
    }

    fn append(&self, service: ServiceKey, registration: Registration) {
        tracing::trace!(service = %service, kind = ?registration, "registering service");
        self.services.entry(service.id()).or_default().push(registration);
    }

    // Entries are cloned out so no shard guard is held while user code
    // (constructors, factories) runs and possibly re-enters the table.
    fn last_registration(&self, key: &ServiceKey) -> Option<Registration> {
        self.services
            .get(&key.id())
            .and_then(|entries| entries.value().last().cloned())
    }

    fn registrations_for(&self, key: &ServiceKey) -> Vec<Registration> {
        self.services
            .get(&key.id())
            .map(|entries| entries.value().clone())
            .unwrap_or_default()
    }
}

impl TypeRegistrar for ContainerBridge {
    fn register(&self, service: ServiceKey, ctor: ConstructorFn) -> Result<()> {
        self.append(service, Registration::ByType(ctor));
        Ok(())
    }

    fn register_instance(&self, service: ServiceKey, instance: ServiceInstance) -> Result<()> {
        self.append(service, Registration::ByInstance(instance));
        Ok(())
    }

    fn register_lazy(&self, service: ServiceKey, factory: ServiceFactory) -> Result<()> {
        self.append(service, Registration::ByFactory(factory));
        Ok(())
    }

    fn build(self: Arc<Self>) -> Arc<dyn TypeResolver> {
        self
    }
}

impl TypeResolver for ContainerBridge {
    fn resolve(&self, request: &TypeRequest) -> Result<Option<ServiceInstance>> {
        match request {
            TypeRequest::All { element, sequence } => {
                let local = self.registrations_for(element);
                materializer::materialize(element, *sequence, &local, self.host.as_ref(), self)
                    .map(Some)
            }
            TypeRequest::One(key) => match self.last_registration(key) {
                // Last-registered entry wins over both earlier entries
                // and anything the host holds for the same type.
                Some(registration) => registration.realize(self.host.as_ref(), self).map(Some),
                None => Ok(self.host.resolve_one(key)),
            },
        }
    }
}
