use crate::error::{FamilyError, Result};
use crate::person::Person;
use crate::registry::Registry;
use std::collections::HashSet;

/// A single generation of ancestors, deduplicated.
pub type Generation = HashSet<String>;

impl Registry {
    /// Enumerates the ancestors of `person`, one set per generation.
    ///
    /// Index 0 holds the parents, index 1 the grandparents, and so on:
    /// generation `i` contains exactly the ancestors `i + 1` parent-links
    /// away. A person reachable through both sides of the family appears
    /// once per generation.
    ///
    /// Fails with [`FamilyError::UnknownPerson`] if a parent identifier is
    /// not registered, and with [`FamilyError::CyclicAncestry`] if the parent
    /// graph loops back on itself.
    pub fn ancestors(&self, person: &Person) -> Result<Vec<Generation>> {
        let mut path = HashSet::new();
        self.ancestors_walk(person, &mut path)
    }

    fn ancestors_walk(
        &self,
        person: &Person,
        path: &mut HashSet<String>,
    ) -> Result<Vec<Generation>> {
        if person.parents.is_empty() {
            return Ok(Vec::new());
        }

        // `path` tracks the active recursion chain only; entries are removed
        // on the way back out so a shared ancestor reached through both
        // parents is not mistaken for a cycle.
        if !path.insert(person.identifier.clone()) {
            return Err(FamilyError::CyclicAncestry(person.identifier.clone()));
        }

        let parents: Generation = person.parents.iter().cloned().collect();

        // Merge the parents' own chains depth by depth. Chains of unequal
        // length pad with empty sets: the shorter side contributes nothing
        // past its end, it never truncates the longer side.
        let mut older: Vec<Generation> = Vec::new();
        for parent_id in &person.parents {
            let parent = self.get(parent_id)?;
            let chain = self.ancestors_walk(parent, path)?;
            for (depth, generation) in chain.into_iter().enumerate() {
                match older.get_mut(depth) {
                    Some(merged) => merged.extend(generation),
                    None => older.push(generation),
                }
            }
        }

        path.remove(&person.identifier);

        let mut generations = Vec::with_capacity(older.len() + 1);
        generations.push(parents);
        generations.extend(older);
        Ok(generations)
    }
}
