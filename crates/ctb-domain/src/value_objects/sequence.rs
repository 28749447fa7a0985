//! Concrete sequence synthesis
//!
//! The consuming framework inspects the runtime type of a collection
//! resolution result and rejects type-erased containers, so collection
//! requests must materialize a `Vec<Arc<T>>` that is genuinely
//! parameterized by the element type. Without runtime reflection the only
//! place that type is known is a monomorphized call site, so the synthesis
//! capability is captured there as a pair of function pointers and cached
//! per element type for the lifetime of the process.

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ports::ServiceInstance;

/// Synthesis capability for a concretely-typed sequence of one element type
///
/// Holds the monomorphized `make`/`push` operations for `Vec<Arc<T>>`.
/// Both are plain function pointers, so a vtable is `Copy` and two vtables
/// built for the same element type are interchangeable.
#[derive(Clone, Copy)]
pub struct SequenceVtable {
    /// Create an empty `Vec<Arc<T>>` behind `dyn Any`
    pub make: fn() -> Box<dyn Any + Send + Sync>,
    /// Append an erased instance, downcasting it to the element type
    pub push: fn(&mut (dyn Any + Send + Sync), ServiceInstance) -> Result<()>,
}

impl SequenceVtable {
    /// Capture the synthesis operations for element type `T`
    pub fn of<T: Send + Sync + 'static>() -> Self {
        Self {
            make: make_sequence::<T>,
            push: push_element::<T>,
        }
    }
}

impl std::fmt::Debug for SequenceVtable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceVtable").finish_non_exhaustive()
    }
}

fn make_sequence<T: Send + Sync + 'static>() -> Box<dyn Any + Send + Sync> {
    Box::new(Vec::<Arc<T>>::new())
}

fn push_element<T: Send + Sync + 'static>(
    sequence: &mut (dyn Any + Send + Sync),
    instance: ServiceInstance,
) -> Result<()> {
    let element = std::any::type_name::<T>();
    let sequence = sequence
        .downcast_mut::<Vec<Arc<T>>>()
        .ok_or_else(|| Error::synthesis(element, "cached sequence has a different element type"))?;
    let instance = instance
        .downcast::<T>()
        .map_err(|_| Error::synthesis(element, "instance is not of the sequence element type"))?;
    sequence.push(instance);
    Ok(())
}
