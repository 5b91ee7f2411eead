use crate::ancestry::Generation;
use crate::error::Result;
use crate::labels;
use crate::registry::Registry;
use std::fmt;

/// Classified blood relationship, read from the first person's point of
/// view: the label answers "what is the second person to the first?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The second person is a direct ancestor, `generations` offsets up
    /// (0 = parent, 1 = grandparent, ...)
    Ancestor { generations: usize },

    /// The second person is a direct descendant, `generations` offsets down
    Descendant { generations: usize },

    /// Related through a shared ancestor; the offsets index each person's
    /// generation list at the nearest common generation
    Collateral {
        first_offset: usize,
        second_offset: usize,
    },

    /// No common ancestor on record
    NotRelated,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Relation::Ancestor { generations } => {
                f.write_str(&labels::lineal(generations, "Parent"))
            }
            Relation::Descendant { generations } => {
                f.write_str(&labels::lineal(generations, "Child"))
            }
            Relation::Collateral {
                first_offset,
                second_offset,
            } => f.write_str(&labels::collateral(first_offset, second_offset)),
            Relation::NotRelated => f.write_str("Not related by blood"),
        }
    }
}

impl Registry {
    /// Classifies how `second_id` relates to `first_id` by blood.
    ///
    /// Lineal relationships win over collateral ones; among collateral
    /// candidates the nearest common generation relative to the first person
    /// is preferred, ties broken by the nearest generation of the second.
    /// Pure: reads registry state, never mutates it.
    pub fn classify(&self, first_id: &str, second_id: &str) -> Result<Relation> {
        let first = self.get(first_id)?;
        let second = self.get(second_id)?;

        let first_ancestors = self.ancestors(first)?;
        let second_ancestors = self.ancestors(second)?;

        if let Some(generations) = generation_of(&first_ancestors, second_id) {
            return Ok(Relation::Ancestor { generations });
        }
        if let Some(generations) = generation_of(&second_ancestors, first_id) {
            return Ok(Relation::Descendant { generations });
        }

        for (first_offset, gen_f) in first_ancestors.iter().enumerate() {
            for (second_offset, gen_s) in second_ancestors.iter().enumerate() {
                if !gen_f.is_disjoint(gen_s) {
                    log::debug!(
                        "common ancestor generation for {first_id}/{second_id}: \
                         [{first_offset}][{second_offset}]"
                    );
                    return Ok(Relation::Collateral {
                        first_offset,
                        second_offset,
                    });
                }
            }
        }

        Ok(Relation::NotRelated)
    }

    /// Human-readable label for how `second_id` relates to `first_id`.
    pub fn relationship(&self, first_id: &str, second_id: &str) -> Result<String> {
        Ok(self.classify(first_id, second_id)?.to_string())
    }
}

fn generation_of(ancestors: &[Generation], identifier: &str) -> Option<usize> {
    ancestors
        .iter()
        .position(|generation| generation.contains(identifier))
}
