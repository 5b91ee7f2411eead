use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single member of the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique, stable identifier used as the registry key
    pub identifier: String,

    /// Full display name
    pub name: String,

    /// Date of birth
    pub dob: Option<NaiveDate>,

    /// Date of death
    pub dod: Option<NaiveDate>,

    /// Identifiers of the biological parents (zero, one or two)
    #[serde(default)]
    pub parents: Vec<String>,

    /// Identifiers of current or former spouses
    #[serde(default)]
    pub spouses: Vec<String>,

    /// Place of birth
    pub birth_place: Option<String>,
}

impl Person {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            dob: None,
            dod: None,
            parents: Vec::new(),
            spouses: Vec::new(),
            birth_place: None,
        }
    }

    pub fn with_parents(mut self, parents: &[&str]) -> Self {
        self.parents = parents.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_spouses(mut self, spouses: &[&str]) -> Self {
        self.spouses = spouses.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Date of birth as display text, e.g. "b. 1961-03-27"
    pub fn dob_string(&self) -> Option<String> {
        self.dob.map(|d| format!("b. {d}"))
    }

    /// Date of death as display text, e.g. "d. 2020-11-02"
    pub fn dod_string(&self) -> Option<String> {
        self.dod.map(|d| format!("d. {d}"))
    }
}
