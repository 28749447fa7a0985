//! Framework-facing registrar and resolver contracts
//!
//! The consuming command-line framework only ever sees these two traits:
//! it registers services ahead of a command invocation through
//! [`TypeRegistrar`], then resolves them during execution through
//! [`TypeResolver`]. Both sides traffic in `Arc`-erased instances so the
//! boundary stays object-safe; the typed convenience layer lives in the
//! infrastructure crate.

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{ServiceKey, TypeRequest};

/// An `Arc`-erased service value crossing the bridge boundary
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

/// A zero-argument factory, invoked once per resolution request
pub type ServiceFactory = Arc<dyn Fn() -> ServiceInstance + Send + Sync>;

/// A monomorphized constructor captured at registration time
///
/// Constructor arguments are resolved through the resolver it is handed,
/// which is the combined (bridge + host container) view.
pub type ConstructorFn = fn(&dyn TypeResolver) -> Result<ServiceInstance>;

/// Registration-time surface of the bridge
///
/// All three registration kinds append to the registration table for the
/// given service key; insertion order is preserved and later entries win
/// for single-instance resolution. Implementations must be safe under
/// concurrent registration from independent configuration stages.
pub trait TypeRegistrar: Send + Sync {
    /// Append a by-type registration with its captured constructor
    fn register(&self, service: ServiceKey, ctor: ConstructorFn) -> Result<()>;

    /// Append a by-instance registration, returned verbatim on resolution
    fn register_instance(&self, service: ServiceKey, instance: ServiceInstance) -> Result<()>;

    /// Append a by-factory registration, invoked per resolution request
    fn register_lazy(&self, service: ServiceKey, factory: ServiceFactory) -> Result<()>;

    /// Finalize the registrar into its resolution-serving form
    ///
    /// May return the registrar itself.
    fn build(self: Arc<Self>) -> Arc<dyn TypeResolver>;
}

/// Resolution-time surface of the bridge
pub trait TypeResolver: Send + Sync {
    /// Resolve a request
    ///
    /// Single-instance requests with no registration anywhere resolve to
    /// `Ok(None)`; collection requests always resolve to a sequence,
    /// possibly empty. Construction and synthesis failures surface as
    /// errors.
    fn resolve(&self, request: &TypeRequest) -> Result<Option<ServiceInstance>>;
}

/// Constructor-injection contract for by-type registrations
///
/// A type registered by type declares here how to construct itself from a
/// resolver view; the bridge captures the monomorphized constructor at the
/// registration call site.
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Construct an instance, resolving dependencies through `resolver`
    fn inject(resolver: &dyn TypeResolver) -> Result<Self>;
}
