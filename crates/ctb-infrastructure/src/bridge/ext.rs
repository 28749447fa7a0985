//! Typed convenience extensions
//!
//! The bridge boundary traffics in erased keys and instances so it stays
//! object-safe; this module is the typed layer callers actually use.
//! Registration extensions capture the monomorphized constructor or
//! factory at the call site, resolution extensions downcast results back
//! to concrete types.

use std::any::type_name;
use std::sync::Arc;

use ctb_domain::error::{Error, Result};
use ctb_domain::ports::{
    Injectable, ServiceFactory, ServiceInstance, TypeRegistrar, TypeResolver,
};
use ctb_domain::value_objects::{ServiceKey, TypeRequest};

/// Typed registration surface over [`TypeRegistrar`]
pub trait RegistrarExt: TypeRegistrar {
    /// Register implementation `I` for service type `S`
    ///
    /// The constructor is captured here; on every resolution a fresh `I`
    /// is built through the host's injection facility and converted into
    /// the service type.
    fn register_type<S, I>(&self) -> Result<()>
    where
        S: Send + Sync + 'static,
        I: Injectable + Into<S>,
    {
        self.register(ServiceKey::of::<S>(), construct_erased::<S, I>)
    }

    /// Register an existing value for service type `S`
    fn register_value<S: Send + Sync + 'static>(&self, value: S) -> Result<()> {
        self.register_instance(ServiceKey::of::<S>(), Arc::new(value))
    }

    /// Register a factory for service type `S`, invoked per resolution
    fn register_factory<S, F>(&self, factory: F) -> Result<()>
    where
        S: Send + Sync + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        let factory: ServiceFactory = Arc::new(move || Arc::new(factory()) as ServiceInstance);
        self.register_lazy(ServiceKey::of::<S>(), factory)
    }
}

impl<R: TypeRegistrar + ?Sized> RegistrarExt for R {}

/// Typed resolution surface over [`TypeResolver`]
pub trait ResolverExt: TypeResolver {
    /// Resolve the single instance for `T`, absent if nothing is
    /// registered anywhere
    fn resolve_service<T: Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        match self.resolve(&TypeRequest::one::<T>())? {
            None => Ok(None),
            Some(instance) => instance.downcast::<T>().map(Some).map_err(|_| {
                Error::construction(type_name::<T>(), "resolved instance has a different type")
            }),
        }
    }

    /// Resolve the single instance for `T`, failing if absent
    ///
    /// This is the call `Injectable` constructors use for mandatory
    /// dependencies; absence surfaces as a construction failure.
    fn resolve_required<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolve_service::<T>()?.ok_or_else(|| {
            Error::construction(
                type_name::<T>(),
                "no registration in the bridge or the host container",
            )
        })
    }

    /// Resolve every instance registered for element type `T`
    ///
    /// Bridge registrations come first in insertion order, host instances
    /// follow in container order. Zero registrations yield an empty
    /// vector, never an error.
    fn resolve_collection<T: Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>> {
        let Some(sequence) = self.resolve(&TypeRequest::all::<T>())? else {
            return Ok(Vec::new());
        };
        let sequence = sequence.downcast::<Vec<Arc<T>>>().map_err(|_| {
            Error::synthesis(
                type_name::<T>(),
                "materialized sequence has a different element type",
            )
        })?;
        Ok(Arc::try_unwrap(sequence).unwrap_or_else(|shared| shared.as_ref().clone()))
    }
}

impl<R: TypeResolver + ?Sized> ResolverExt for R {}

/// Erased constructor for `I`-as-`S`, captured at registration time
fn construct_erased<S, I>(resolver: &dyn TypeResolver) -> Result<ServiceInstance>
where
    S: Send + Sync + 'static,
    I: Injectable + Into<S>,
{
    let service: S = I::inject(resolver)?.into();
    Ok(Arc::new(service))
}
