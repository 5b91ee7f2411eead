//! # Family Viz
//!
//! Display-side collaborators for a family registry: the logical family
//! graph (nodes and edges handed to a Graphviz layout) and per-person
//! summary boxes.
//!
//! ```text
//! Registry
//!     │
//!     ├──> FamilyGraph (petgraph)
//!     │      ├─ Nodes: persons (HTML summary label)
//!     │      └─ Edges: Spousal (from couples), ParentChild (from parent lists)
//!     │
//!     └──> to_dot() -> Graphviz DOT text; layout is Graphviz's job
//! ```

mod graph;
mod summary;

pub use graph::{FamilyEdge, FamilyGraph, FamilyNode};
pub use summary::{html_label, text_box};
