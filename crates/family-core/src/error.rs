use thiserror::Error;

/// Result type for family operations
pub type Result<T> = std::result::Result<T, FamilyError>;

/// Errors that can occur while loading or querying a family
#[derive(Error, Debug)]
pub enum FamilyError {
    /// A query or a parent link referenced an identifier not in the registry
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    /// A person turned up in their own ancestor chain
    #[error("Cyclic ancestry through: {0}")]
    CyclicAncestry(String),

    /// A record's key set does not match the expected schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Two records carry the same identifier
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FamilyError {
    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create an unknown-person error
    pub fn unknown(identifier: impl Into<String>) -> Self {
        Self::UnknownPerson(identifier.into())
    }
}
