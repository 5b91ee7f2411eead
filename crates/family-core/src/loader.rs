use crate::error::{FamilyError, Result};
use crate::person::Person;
use crate::registry::Registry;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Exact key set every person record must carry. Optional fields are still
/// required as keys; their values may be null.
const EXPECTED_KEYS: [&str; 7] = [
    "birth_place",
    "dob",
    "dod",
    "identifier",
    "name",
    "parents",
    "spouses",
];

impl Registry {
    /// Loads a family from a JSON file holding an array of person records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a JSON array of person records.
    ///
    /// Validation runs before any record is constructed: each record's key
    /// set must match the expected schema exactly and identifiers must be
    /// unique across the whole document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(text)?;
        validate_records(&records)?;

        let mut registry = Registry::new();
        for record in records {
            let person: Person = serde_json::from_value(record)?;
            registry.add_person(person);
        }
        log::debug!("loaded {} family members", registry.len());
        Ok(registry)
    }
}

fn validate_records(records: &[Value]) -> Result<()> {
    let expected: HashSet<&str> = EXPECTED_KEYS.into_iter().collect();
    let mut seen: HashSet<String> = HashSet::new();

    for record in records {
        let map = record
            .as_object()
            .ok_or_else(|| FamilyError::schema("person record is not a JSON object"))?;

        let keys: HashSet<&str> = map.keys().map(String::as_str).collect();
        if keys != expected {
            return Err(key_mismatch(map, &keys, &expected));
        }

        let identifier = map
            .get("identifier")
            .and_then(Value::as_str)
            .ok_or_else(|| FamilyError::schema("identifier must be a string"))?;
        if !seen.insert(identifier.to_string()) {
            return Err(FamilyError::DuplicateIdentifier(identifier.to_string()));
        }
    }

    Ok(())
}

fn key_mismatch(
    map: &serde_json::Map<String, Value>,
    keys: &HashSet<&str>,
    expected: &HashSet<&str>,
) -> FamilyError {
    let subject = map
        .get("identifier")
        .and_then(Value::as_str)
        .unwrap_or("<no identifier>");

    let mut missing: Vec<&str> = expected.difference(keys).copied().collect();
    let mut unexpected: Vec<&str> = keys.difference(expected).copied().collect();
    missing.sort_unstable();
    unexpected.sort_unstable();

    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing keys: {}", missing.join(", ")));
    }
    if !unexpected.is_empty() {
        parts.push(format!("unexpected keys: {}", unexpected.join(", ")));
    }

    FamilyError::schema(format!("record {subject}: {}", parts.join("; ")))
}
