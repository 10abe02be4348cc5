// 🧱 Builders - Accumulate trait values from suppliers, freeze into records
//
// A builder owns its sequences. Each add invokes the caller's supplier
// exactly once, synchronously, and appends the result in order. build()
// copies the current sequences into an immutable Person.
//
// Building is repeatable: adds after a build affect only later builds,
// never records already returned.

use anyhow::Result;

use crate::identity::PersonId;
use crate::person::{Person, Role};

/// Seeded first by the preset constructors, through the normal append path.
pub const DEFAULT_LANGUAGE: &str = "Kotlin";

// ============================================================================
// DEVELOPER BUILDER
// ============================================================================

/// Accumulates known languages for a `Role::Developer` record.
#[derive(Debug)]
pub struct DeveloperBuilder {
    name: String,
    age: Option<u32>,
    profession: Option<String>,
    friends: Vec<PersonId>,
    languages: Vec<String>,
}

impl DeveloperBuilder {
    /// Start accumulating for a named person, all sequences empty
    pub fn new(name: impl Into<String>) -> Self {
        DeveloperBuilder {
            name: name.into(),
            age: None,
            profession: None,
            friends: Vec::new(),
            languages: Vec::new(),
        }
    }

    /// Preset variant: seeds the default language before any caller additions
    pub fn with_default_language(name: impl Into<String>) -> Self {
        let mut builder = Self::new(name);
        builder.add_language(|| DEFAULT_LANGUAGE.to_string());
        builder
    }

    pub fn age(&mut self, age: u32) -> &mut Self {
        self.age = Some(age);
        self
    }

    pub fn profession(&mut self, profession: impl Into<String>) -> &mut Self {
        self.profession = Some(profession.into());
        self
    }

    /// Record a related person by identity (ordered)
    pub fn friend(&mut self, id: PersonId) -> &mut Self {
        self.friends.push(id);
        self
    }

    /// Invoke the supplier once and append its result.
    ///
    /// A panicking supplier propagates to the caller unchanged.
    pub fn add_language(&mut self, supplier: impl FnOnce() -> String) -> &mut Self {
        self.languages.push(supplier());
        self
    }

    /// Fallible supplier path: an Err propagates to the caller and the
    /// sequence is left exactly as it was before this call.
    pub fn try_add_language(
        &mut self,
        supplier: impl FnOnce() -> Result<String>,
    ) -> Result<&mut Self> {
        let value = supplier()?;
        self.languages.push(value);
        Ok(self)
    }

    /// Freeze the current sequences into an immutable record.
    ///
    /// Repeatable: each call is an independent by-value snapshot with its
    /// own identity.
    pub fn build(&self) -> Person {
        Person::new(
            self.name.clone(),
            self.age,
            self.profession.clone(),
            self.friends.clone(),
            Role::Developer {
                languages: self.languages.clone(),
            },
        )
    }
}

// ============================================================================
// ARCHITECT BUILDER
// ============================================================================

/// Accumulates known languages and design patterns for a `Role::Architect`
/// record. Same contract as `DeveloperBuilder`, one extra sequence.
#[derive(Debug)]
pub struct ArchitectBuilder {
    name: String,
    age: Option<u32>,
    profession: Option<String>,
    friends: Vec<PersonId>,
    languages: Vec<String>,
    patterns: Vec<String>,
}

impl ArchitectBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        ArchitectBuilder {
            name: name.into(),
            age: None,
            profession: None,
            friends: Vec::new(),
            languages: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Preset variant: seeds the default language before any caller additions
    pub fn with_default_language(name: impl Into<String>) -> Self {
        let mut builder = Self::new(name);
        builder.add_language(|| DEFAULT_LANGUAGE.to_string());
        builder
    }

    pub fn age(&mut self, age: u32) -> &mut Self {
        self.age = Some(age);
        self
    }

    pub fn profession(&mut self, profession: impl Into<String>) -> &mut Self {
        self.profession = Some(profession.into());
        self
    }

    pub fn friend(&mut self, id: PersonId) -> &mut Self {
        self.friends.push(id);
        self
    }

    pub fn add_language(&mut self, supplier: impl FnOnce() -> String) -> &mut Self {
        self.languages.push(supplier());
        self
    }

    pub fn try_add_language(
        &mut self,
        supplier: impl FnOnce() -> Result<String>,
    ) -> Result<&mut Self> {
        let value = supplier()?;
        self.languages.push(value);
        Ok(self)
    }

    pub fn add_pattern(&mut self, supplier: impl FnOnce() -> String) -> &mut Self {
        self.patterns.push(supplier());
        self
    }

    pub fn try_add_pattern(
        &mut self,
        supplier: impl FnOnce() -> Result<String>,
    ) -> Result<&mut Self> {
        let value = supplier()?;
        self.patterns.push(value);
        Ok(self)
    }

    pub fn build(&self) -> Person {
        Person::new(
            self.name.clone(),
            self.age,
            self.profession.clone(),
            self.friends.clone(),
            Role::Architect {
                languages: self.languages.clone(),
                patterns: self.patterns.clone(),
            },
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
