//! Bridge layer tests
//!
//! Tests for the type-resolution bridge:
//! - Registration table behavior (order, concurrency)
//! - Resolver dispatch and override semantics
//! - Collection materialization and the synthesis cache

mod materializer_tests;
mod registrar_tests;

use std::sync::Arc;

use ctb_domain::ports::HostContainer;
use ctb_infrastructure::bridge::ContainerBridge;
use ctb_infrastructure::host::{MemoryHostContainer, NullHostContainer};

/// A service with observable identity, used across the bridge tests
#[derive(Debug, PartialEq, Eq)]
pub struct Greeting(pub &'static str);

/// Bridge over an empty host container
pub fn bridge() -> ContainerBridge {
    ContainerBridge::new(Arc::new(NullHostContainer::new()))
}

/// Bridge over a pre-populated in-memory host container
pub fn bridge_with_host(host: MemoryHostContainer) -> ContainerBridge {
    ContainerBridge::new(Arc::new(host) as Arc<dyn HostContainer>)
}
