// 📇 Person Registry - In-memory lookups over registered records
//
// Append-only: records are immutable, so the registry only ever grows.
// Single-owner and single-threaded, mutation goes through &mut self.

use crate::identity::PersonId;
use crate::person::{self, Person};

/// Registry of all registered people.
pub struct PersonRegistry {
    people: Vec<Person>,
}

impl PersonRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        PersonRegistry { people: Vec::new() }
    }

    /// Register a record (append-only)
    pub fn register(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Count registered people
    pub fn count(&self) -> usize {
        self.people.len()
    }

    /// All registered people, in registration order
    pub fn all(&self) -> &[Person] {
        &self.people
    }

    /// Find a person by identity
    pub fn find_by_id(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == *id)
    }

    /// First registered person with this display name
    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }

    /// Resolve a person's friends to display names, skipping unknown ids
    pub fn friends_of(&self, id: &PersonId) -> Vec<String> {
        self.find_by_id(id)
            .map(|person| {
                person
                    .friends
                    .iter()
                    .filter_map(|friend_id| self.find_by_id(friend_id))
                    .map(|friend| friend.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Registered person with the greatest known age
    pub fn oldest(&self) -> Option<&Person> {
        person::oldest(&self.people)
    }
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Role;

    fn civilian(name: &str, age: Option<u32>) -> Person {
        Person::new(name, age, None, Vec::new(), Role::Civilian)
    }

    #[test]
    fn test_register_and_count() {
        let mut registry = PersonRegistry::new();
        assert_eq!(registry.count(), 0);

        registry.register(civilian("Ada", Some(36)));
        registry.register(civilian("Grace", Some(41)));

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.all().len(), 2);
    }

    #[test]
    fn test_find_by_id() {
        let mut registry = PersonRegistry::new();
        let ada = civilian("Ada", None);
        let ada_id = ada.id;
        registry.register(ada);

        assert_eq!(registry.find_by_id(&ada_id).unwrap().name, "Ada");
        assert!(registry.find_by_id(&PersonId::new()).is_none());
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut registry = PersonRegistry::new();
        let first = civilian("Ada", Some(36));
        let first_id = first.id;
        registry.register(first);
        registry.register(civilian("Ada", Some(99)));

        let found = registry.find_by_name("Ada").unwrap();
        assert_eq!(found.id, first_id);
        assert!(registry.find_by_name("Nobody").is_none());
    }

    #[test]
    fn test_friends_of_resolves_names_in_order() {
        let mut registry = PersonRegistry::new();
        let ada = civilian("Ada", None);
        let grace = civilian("Grace", None);
        let stranger_id = PersonId::new();

        let linus = Person::new(
            "Linus",
            None,
            None,
            vec![grace.id, stranger_id, ada.id],
            Role::Civilian,
        );
        let linus_id = linus.id;

        registry.register(ada);
        registry.register(grace);
        registry.register(linus);

        // Unknown ids are skipped, order of the rest preserved
        assert_eq!(
            registry.friends_of(&linus_id),
            vec!["Grace".to_string(), "Ada".to_string()]
        );
        assert!(registry.friends_of(&stranger_id).is_empty());
    }

    #[test]
    fn test_oldest() {
        let mut registry = PersonRegistry::new();
        assert!(registry.oldest().is_none());

        registry.register(civilian("Ada", Some(36)));
        registry.register(civilian("Grace", Some(41)));
        registry.register(civilian("Ghost", None));

        assert_eq!(registry.oldest().unwrap().name, "Grace");
    }
}
