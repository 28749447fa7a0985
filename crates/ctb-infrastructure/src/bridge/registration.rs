//! Service registrations held by the bridge
//!
//! One registration binds a requested service type to exactly one way of
//! producing a value. The closed sum makes realization an exhaustive
//! match instead of a null-check over three mutually exclusive fields.

use ctb_domain::error::Result;
use ctb_domain::ports::{ConstructorFn, HostContainer, ServiceFactory, ServiceInstance, TypeResolver};

/// A service registered directly with the bridge
///
/// Cloning is cheap (a function pointer or an `Arc` bump); entries are
/// cloned out of the registration table before realization so constructors
/// can re-enter the table.
#[derive(Clone)]
pub(crate) enum Registration {
    /// Construct a fresh instance through the host's injection facility
    ByType(ConstructorFn),
    /// Return the stored value verbatim, never reconstructed
    ByInstance(ServiceInstance),
    /// Invoke the factory once per resolution request, not memoized
    ByFactory(ServiceFactory),
}

impl Registration {
    /// Produce the value for this registration
    pub(crate) fn realize(
        &self,
        host: &dyn HostContainer,
        resolver: &dyn TypeResolver,
    ) -> Result<ServiceInstance> {
        match self {
            Self::ByType(ctor) => host.construct(*ctor, resolver),
            Self::ByInstance(instance) => Ok(instance.clone()),
            Self::ByFactory(factory) => Ok(factory()),
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByType(_) => f.write_str("Registration::ByType"),
            Self::ByInstance(_) => f.write_str("Registration::ByInstance"),
            Self::ByFactory(_) => f.write_str("Registration::ByFactory"),
        }
    }
}
