// 👤 Person Entity - Immutable record with role-specific trait lists
//
// A person is a snapshot: identity + values frozen at construction.
//
// Specializations (developer, architect) add data, never behavior, so they
// are a tagged Role variant on one concrete type rather than an
// inheritance tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identity::PersonId;

// ============================================================================
// ROLE
// ============================================================================

/// Role tag carrying the trait lists specific to each specialization.
///
/// Trait lists are ordered sequences: insertion order is significant,
/// duplicates are permitted, empty is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// Base shape, no trait lists
    Civilian,

    /// Adds known languages
    Developer { languages: Vec<String> },

    /// Adds known languages and known design patterns
    Architect {
        languages: Vec<String>,
        patterns: Vec<String>,
    },
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Civilian => "Civilian",
            Role::Developer { .. } => "Developer",
            Role::Architect { .. } => "Architect",
        }
    }
}

// ============================================================================
// PERSON ENTITY
// ============================================================================

/// Immutable person record.
///
/// Identity: id (never changes)
/// Values: everything else, frozen at construction - no mutators exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Stable identity - NEVER changes
    pub id: PersonId,

    /// Display name
    pub name: String,

    /// Age in years, absent when unknown
    pub age: Option<u32>,

    /// Profession label, absent when unknown
    pub profession: Option<String>,

    /// Related people, by identity, in insertion order
    pub friends: Vec<PersonId>,

    /// Specialization tag plus its trait lists
    pub role: Role,

    /// When this record was constructed
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Construct a record directly.
    ///
    /// No validation: age and profession may be absent, friend and trait
    /// lists may be empty.
    pub fn new(
        name: impl Into<String>,
        age: Option<u32>,
        profession: Option<String>,
        friends: Vec<PersonId>,
        role: Role,
    ) -> Self {
        Person {
            id: PersonId::new(),
            name: name.into(),
            age,
            profession,
            friends,
            role,
            created_at: Utc::now(),
        }
    }

    /// Known languages (empty slice for roles without them)
    pub fn languages(&self) -> &[String] {
        match &self.role {
            Role::Civilian => &[],
            Role::Developer { languages } => languages,
            Role::Architect { languages, .. } => languages,
        }
    }

    /// Known design patterns (empty slice for roles without them)
    pub fn patterns(&self) -> &[String] {
        match &self.role {
            Role::Architect { patterns, .. } => patterns,
            _ => &[],
        }
    }
}

/// The one canonical human-readable description.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role.as_str())?;
        if let Some(age) = self.age {
            write!(f, ", {} years old", age)?;
        }
        if let Some(profession) = &self.profession {
            write!(f, ", works as {}", profession)?;
        }
        if !self.languages().is_empty() {
            write!(f, ", knows {}", self.languages().join(", "))?;
        }
        if !self.patterns().is_empty() {
            write!(f, ", applies {}", self.patterns().join(", "))?;
        }
        Ok(())
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Person with the greatest known age.
///
/// People without an age are skipped; None when nobody has one.
pub fn oldest(people: &[Person]) -> Option<&Person> {
    people
        .iter()
        .filter(|p| p.age.is_some())
        .max_by_key(|p| p.age)
}

// ============================================================================
// TESTS
// ============================================================================
