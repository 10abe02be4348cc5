// 🆔 PersonId - Stable identity token
//
// "Name is a VALUE (can change), id is IDENTITY (never changes)"
//
// Every reference between people (friend lists, registry lookups) goes
// through this token, never through display names.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identity for a person record.
///
/// Generated once at construction and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        PersonId(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = PersonId::new();
        let b = PersonId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = PersonId::new();
        let json = serde_json::to_string(&id).unwrap();

        // Transparent newtype: a bare UUID string, not a wrapped object
        assert!(json.starts_with('"'));
        assert!(json.ends_with('"'));
        assert_eq!(json.trim_matches('"'), id.to_string());
    }
}
