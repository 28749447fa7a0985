//! Host container adapters
//!
//! Implementations of the [`HostContainer`](ctb_domain::ports::HostContainer)
//! port for embedding the bridge without a full DI framework and for
//! testing.

/// In-memory host container
pub mod memory;
/// Host container that resolves nothing
pub mod null;

pub use memory::MemoryHostContainer;
pub use null::NullHostContainer;
