//! Domain Port Interfaces
//!
//! Boundary contracts between the bridge and the components on either
//! side of it. Ports follow the Dependency Inversion Principle: the
//! domain defines the interfaces, the infrastructure layer implements
//! them.
//!
//! ## Organization
//!
//! - **bridge** - The surface the consuming command-line framework talks to
//! - **host** - The host dependency-injection container the bridge shadows

/// Framework-facing registrar and resolver contracts
pub mod bridge;
/// Host container contract
pub mod host;

pub use bridge::{
    ConstructorFn, Injectable, ServiceFactory, ServiceInstance, TypeRegistrar, TypeResolver,
};
pub use host::HostContainer;
