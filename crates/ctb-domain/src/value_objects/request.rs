//! Resolution request shapes
//!
//! The framework asks for either "the one instance for type T" or "every
//! instance registered for element type T". The original distinction is
//! structural (a sequence-of-T request rather than a concrete type), so
//! [`TypeRequest`] encodes it as a closed sum the resolver matches on.
//! The collection constructor is the only point where the element type is
//! statically known, so it captures the [`SequenceVtable`] alongside the
//! element key.

use crate::value_objects::{SequenceVtable, ServiceKey};

/// A resolution request handed to the bridge by the consuming framework
#[derive(Debug, Clone, Copy)]
pub enum TypeRequest {
    /// Request for the single (last-registered) instance of a type
    One(ServiceKey),
    /// Request for every registered instance of an element type
    All {
        /// The element type of the requested sequence
        element: ServiceKey,
        /// Synthesis operations captured at the monomorphized call site
        sequence: SequenceVtable,
    },
}

impl TypeRequest {
    /// Build a single-instance request for `T`
    pub fn one<T: Send + Sync + 'static>() -> Self {
        Self::One(ServiceKey::of::<T>())
    }

    /// Build a collection request for element type `T`
    pub fn all<T: Send + Sync + 'static>() -> Self {
        Self::All {
            element: ServiceKey::of::<T>(),
            sequence: SequenceVtable::of::<T>(),
        }
    }

    /// The key the request resolves against (element key for collections)
    pub fn key(&self) -> &ServiceKey {
        match self {
            Self::One(key) => key,
            Self::All { element, .. } => element,
        }
    }
}
