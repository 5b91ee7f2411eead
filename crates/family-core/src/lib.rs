//! # Family Core
//!
//! Blood-relationship computation over a genealogical family.
//!
//! ## Features
//!
//! - **Ancestor enumeration** - per-person generation lists (parents,
//!   grandparents, ...) with convergent lineages deduplicated
//! - **Relationship classification** - parent/child chains, siblings,
//!   aunts/uncles, N-th cousins M times removed
//! - **Person registry** - keyed store of members and the couples among them
//! - **JSON loading** - schema-validated family records
//!
//! ## Architecture
//!
//! ```text
//! family.json
//!     │
//!     ├──> Loader (schema + identifier validation)
//!     │
//!     ├──> Registry
//!     │      ├─ Members: identifier -> Person
//!     │      └─ Couples: unordered spouse pairs
//!     │
//!     ├──> Ancestor Enumerator
//!     │      └─ Generation list: Vec<set of identifiers>, index 0 = parents
//!     │
//!     └──> Relationship Classifier
//!            ├─ Lineal check (ancestor / descendant)
//!            ├─ Nearest common generation pair
//!            └─ Label ("Parent", "Siblings", "Second cousin once removed", ...)
//! ```

mod ancestry;
mod couple;
mod error;
mod labels;
mod loader;
mod person;
mod registry;
mod relationship;

pub use ancestry::Generation;
pub use couple::Couple;
pub use error::{FamilyError, Result};
pub use person::Person;
pub use registry::Registry;
pub use relationship::Relation;
