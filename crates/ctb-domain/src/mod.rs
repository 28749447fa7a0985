//! Domain layer for the CLI Type Bridge
//!
//! Defines the contracts shared by the bridge implementation and its
//! collaborators: the error taxonomy, the value objects that describe
//! resolution requests, and the port traits implemented on either side
//! of the bridge boundary.
//!
//! ## Organization
//!
//! - **error** - Error taxonomy and `Result` alias
//! - **value_objects/** - Service keys, resolution requests, sequence synthesis
//! - **ports/** - Boundary contracts (host container, registrar, resolver)

/// Error taxonomy and result alias
pub mod error;
/// Boundary contracts between the bridge and its collaborators
pub mod ports;
/// Immutable value objects describing services and resolution requests
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ports::{
    ConstructorFn, HostContainer, Injectable, ServiceFactory, ServiceInstance, TypeRegistrar,
    TypeResolver,
};
pub use value_objects::{SequenceVtable, ServiceKey, TypeRequest};
