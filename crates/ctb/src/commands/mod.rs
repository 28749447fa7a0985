//! Sample command application
//!
//! A minimal command app demonstrating the bridge: services live in the
//! host container, the command is registered against the bridge by type
//! and constructed through injection when the framework resolves it.

/// Hello command and its service
pub mod hello;

pub use hello::{HelloCommand, HelloService};
