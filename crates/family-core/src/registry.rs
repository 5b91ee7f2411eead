use crate::couple::Couple;
use crate::error::{FamilyError, Result};
use crate::person::Person;
use std::collections::{HashMap, HashSet};

/// In-memory store of family members and the couples among them.
///
/// The registry is the single source of truth the enumerator and classifier
/// read from; they never mutate it. Callers that interleave `add_person` with
/// concurrent queries must synchronize externally.
#[derive(Debug, Default)]
pub struct Registry {
    members: HashMap<String, Person>,
    couples: HashSet<Couple>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person unless the identifier is already registered.
    ///
    /// Spousal links between the new person and already-registered members
    /// are recorded as couples, whichever side declared the link.
    pub fn add_person(&mut self, person: Person) {
        if self.members.contains_key(&person.identifier) {
            return;
        }
        self.update_couples(&person);
        self.members.insert(person.identifier.clone(), person);
    }

    fn update_couples(&mut self, incoming: &Person) {
        for member in self.members.values() {
            if member.spouses.iter().any(|s| s == &incoming.identifier)
                || incoming.spouses.iter().any(|s| s == &member.identifier)
            {
                self.couples
                    .insert(Couple::new(&member.identifier, &incoming.identifier));
            }
        }
    }

    /// Looks up a person by identifier.
    pub fn get(&self, identifier: &str) -> Result<&Person> {
        self.members
            .get(identifier)
            .ok_or_else(|| FamilyError::unknown(identifier))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.members.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = &Person> {
        self.members.values()
    }

    pub fn couples(&self) -> impl Iterator<Item = &Couple> {
        self.couples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry.add_person(Person::new("JD1993", "John Doe").with_spouses(&["JJ1996"]));
        registry.add_person(Person::new("JJ1996", "Jane Jones"));
        registry
    }

    #[test]
    fn test_add_person_ignores_duplicates() {
        let mut registry = sample();
        assert_eq!(registry.len(), 2);
        registry.add_person(Person::new("JD1993", "Impostor"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("JD1993").unwrap().name, "John Doe");
    }

    #[test]
    fn test_contains() {
        let registry = sample();
        assert!(registry.contains("JD1993"));
        assert!(registry.contains("JJ1996"));
        assert!(!registry.contains("XX0000"));
        assert!(!Registry::new().contains("JD1993"));
    }

    #[test]
    fn test_couple_detected_from_either_side() {
        // Link declared by the earlier member
        let registry = sample();
        assert_eq!(registry.couples().count(), 1);
        assert!(registry.couples().any(|c| c.contains("JJ1996")));

        // Link declared by the later member
        let mut registry = Registry::new();
        registry.add_person(Person::new("JJ1996", "Jane Jones"));
        registry.add_person(Person::new("JD1993", "John Doe").with_spouses(&["JJ1996"]));
        assert_eq!(registry.couples().count(), 1);
    }

    #[test]
    fn test_unknown_person_lookup() {
        let registry = sample();
        let err = registry.get("XX0000").unwrap_err();
        assert!(matches!(err, FamilyError::UnknownPerson(id) if id == "XX0000"));
    }
}
