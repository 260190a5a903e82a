//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type PrincipalId = Id<markers::Principal>;
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

// Manual impls: a derive would put a bound on the marker type, and the
// markers are plain uninhabited-by-convention unit structs.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse from a string representation
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Principal IDs (admins and users share the shape)
    pub struct Principal;

    /// Marker for Event IDs
    pub struct Event;
}

/// Type aliases for common IDs
pub type PrincipalId = Id<markers::Principal>;
pub type EventId = Id<markers::Event>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let principal_id: PrincipalId = Id::new();
        let event_id: EventId = Id::new();

        // These are different types, cannot be mixed
        let _p: Uuid = principal_id.into_uuid();
        let _e: Uuid = event_id.into_uuid();
    }

    #[test]
    fn test_id_is_copy_without_marker_bounds() {
        // The markers implement nothing; Id must still be Copy/Clone/Eq/Hash.
        fn assert_copy<T: Copy>(_: T) {}
        fn assert_hash<T: std::hash::Hash>(_: &T) {}

        let id: PrincipalId = Id::new();
        let moved = id;
        assert_copy(id);
        assert_hash(&id);
        assert_eq!(moved, id);
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: PrincipalId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_parse_str() {
        let id: EventId = Id::new();
        let parsed = EventId::parse_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(EventId::parse_str("not-a-uuid").is_err());
    }
}
