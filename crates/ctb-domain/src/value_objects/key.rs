//! Service type identity
//!
//! A [`ServiceKey`] is the runtime identity of a requested service type:
//! the `TypeId` used for table lookups plus the static type name carried
//! for diagnostics and error messages.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime identity of a requested service type
#[derive(Debug, Clone, Copy)]
pub struct ServiceKey {
    id: TypeId,
    name: &'static str,
}

impl ServiceKey {
    /// Create the key for a service type
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The `TypeId` of the service type
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The service type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Identity is the TypeId; the name is diagnostic payload.
impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
