//! # CLI Type Bridge
//!
//! A type-resolution bridge that lets a command-line framework obtain
//! service instances from a host dependency-injection container, while
//! honoring registrations made directly against the bridge. Bridge
//! registrations take priority over, and are merged with, the
//! container's own registrations.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ctb::infrastructure::host::MemoryHostContainer;
//! use ctb::infrastructure::bridge::{ContainerBridge, RegistrarExt, ResolverExt};
//!
//! #[derive(Debug, PartialEq)]
//! struct Banner(&'static str);
//!
//! let host = MemoryHostContainer::new();
//! host.add(Banner("from the host"));
//!
//! let bridge = ContainerBridge::new(Arc::new(host));
//! bridge.register_value(Banner("from the bridge")).unwrap();
//!
//! // The bridge registration shadows the host for single resolution...
//! let one = bridge.resolve_required::<Banner>().unwrap();
//! assert_eq!(one.0, "from the bridge");
//!
//! // ...and both participate in collection resolution, bridge first.
//! let all = bridge.resolve_collection::<Banner>().unwrap();
//! assert_eq!(all.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, value objects and port contracts
//! - `infrastructure` - The bridge implementation, host adapters,
//!   configuration and logging

/// Sample command application
pub mod commands;

/// Domain layer - errors, value objects and port contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ctb_domain::*;
}

/// Infrastructure layer - bridge, host adapters, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ctb_infrastructure::*;
}

// Re-export the types most callers need directly
pub use ctb_domain::{
    Error, HostContainer, Injectable, Result, ServiceKey, TypeRegistrar, TypeRequest, TypeResolver,
};
pub use ctb_infrastructure::{
    ContainerBridge, MemoryHostContainer, NullHostContainer, RegistrarExt, ResolverExt,
};
