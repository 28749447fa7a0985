//! Infrastructure layer for the CLI Type Bridge
//!
//! Implements the domain ports and carries the cross-cutting technical
//! concerns:
//!
//! - **bridge/** - The type-resolution bridge (registration table,
//!   resolver dispatch, collection materializer) and the typed
//!   convenience extensions
//! - **host/** - Host container adapters for embedding and testing
//! - **config/** - Application configuration loading (figment)
//! - **logging** - Structured logging setup (tracing)
//! - **error_ext** - Error context extension utilities

/// Type-resolution bridge implementation
pub mod bridge;
/// Application configuration
pub mod config;
/// Error context extension utilities
pub mod error_ext;
/// Host container adapters
pub mod host;
/// Structured logging setup
pub mod logging;

pub use bridge::{ContainerBridge, RegistrarExt, ResolverExt};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use host::{MemoryHostContainer, NullHostContainer};
