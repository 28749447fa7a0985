//! Domain Value Objects
//!
//! Immutable value objects describing services and resolution requests.
//! Value objects are defined by their attributes and can be compared
//! for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceKey`] | Runtime identity of a requested service type |
//! | [`TypeRequest`] | A single-instance or collection resolution request |
//! | [`SequenceVtable`] | Synthesis capability for concretely-typed sequences |

/// Service type identity
pub mod key;
/// Resolution request shapes
pub mod request;
/// Concrete sequence synthesis
pub mod sequence;

pub use key::ServiceKey;
pub use request::TypeRequest;
pub use sequence::SequenceVtable;
