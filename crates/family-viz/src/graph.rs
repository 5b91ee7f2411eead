use crate::summary;
use family_core::{FamilyError, Registry, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Node in the family graph
#[derive(Debug, Clone)]
pub struct FamilyNode {
    /// Registry identifier of the person
    pub identifier: String,

    /// HTML-like summary label for the layout engine
    pub label: String,
}

/// Edge in the family graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FamilyEdge {
    /// Marriage link between the endpoints
    Spousal,

    /// Parent link between the endpoints
    ParentChild,
}

/// Logical structure of the family for a layout engine: one node per person,
/// spousal and parent edges between them. Layout and drawing are Graphviz's
/// job; this type only supplies nodes, edges and labels.
#[derive(Debug)]
pub struct FamilyGraph {
    graph: UnGraph<FamilyNode, FamilyEdge>,
    index: HashMap<String, NodeIndex>,
}

impl FamilyGraph {
    /// Builds the graph for the whole registry.
    pub fn build(registry: &Registry) -> Result<Self> {
        let mut graph = UnGraph::new_undirected();
        let mut index = HashMap::new();

        for person in registry.members() {
            let node = FamilyNode {
                identifier: person.identifier.clone(),
                label: summary::html_label(person),
            };
            index.insert(person.identifier.clone(), graph.add_node(node));
        }

        for couple in registry.couples() {
            let left = resolve(&index, couple.left())?;
            let right = resolve(&index, couple.right())?;
            graph.add_edge(left, right, FamilyEdge::Spousal);
        }

        for person in registry.members() {
            let child = resolve(&index, &person.identifier)?;
            for parent_id in &person.parents {
                let parent = resolve(&index, parent_id)?;
                graph.add_edge(parent, child, FamilyEdge::ParentChild);
            }
        }

        log::debug!(
            "family graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(Self { graph, index })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Find a person's node by identifier
    pub fn find(&self, identifier: &str) -> Option<NodeIndex> {
        self.index.get(identifier).copied()
    }

    pub fn graph(&self) -> &UnGraph<FamilyNode, FamilyEdge> {
        &self.graph
    }

    /// Renders the graph as Graphviz DOT text.
    ///
    /// Person nodes are rectangles labelled with their HTML summary box;
    /// spousal edges are red, parent edges plain.
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("graph family {\n");
        dot.push_str("    layout=dot;\n");
        dot.push_str("    concentrate=true;\n");
        dot.push_str("    overlap=scale;\n");

        let mut nodes: Vec<&FamilyNode> = self
            .graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect();
        nodes.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        for node in nodes {
            dot.push_str(&format!(
                "    \"{}\" [shape=rectangle, color=black, label=<{}>];\n",
                node.identifier, node.label
            ));
        }

        let mut edges: Vec<(String, String, FamilyEdge)> = self
            .graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].identifier.clone(),
                    self.graph[edge.target()].identifier.clone(),
                    *edge.weight(),
                )
            })
            .collect();
        edges.sort();
        for (source, target, kind) in edges {
            match kind {
                FamilyEdge::Spousal => {
                    dot.push_str(&format!("    \"{source}\" -- \"{target}\" [color=red];\n"));
                }
                FamilyEdge::ParentChild => {
                    dot.push_str(&format!("    \"{source}\" -- \"{target}\";\n"));
                }
            }
        }

        dot.push_str("}\n");
        dot
    }
}

fn resolve(index: &HashMap<String, NodeIndex>, identifier: &str) -> Result<NodeIndex> {
    index
        .get(identifier)
        .copied()
        .ok_or_else(|| FamilyError::unknown(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use family_core::Person;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry.add_person(Person::new("JD1961", "James Doe").with_spouses(&["MD1963"]));
        registry.add_person(Person::new("MD1963", "Mary Doe"));
        registry
            .add_person(Person::new("JD1990", "Jane Doe").with_parents(&["JD1961", "MD1963"]));
        registry
    }

    #[test]
    fn test_build_counts() {
        let graph = FamilyGraph::build(&sample()).unwrap();
        // 3 persons; 1 spousal edge + 2 parent edges
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.find("JD1990").is_some());
        assert!(graph.find("XX0000").is_none());
    }

    #[test]
    fn test_missing_parent_fails() {
        let mut registry = Registry::new();
        registry.add_person(Person::new("JD1990", "Jane Doe").with_parents(&["GHOST"]));

        let err = FamilyGraph::build(&registry).unwrap_err();
        assert!(matches!(err, FamilyError::UnknownPerson(id) if id == "GHOST"));
    }

    #[test]
    fn test_dot_output() {
        let dot = FamilyGraph::build(&sample()).unwrap().to_dot();

        assert!(dot.starts_with("graph family {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("\"JD1990\" [shape=rectangle, color=black, label=<<b>Jane Doe</b>>];"));
        assert!(dot.contains("\"JD1961\" -- \"MD1963\" [color=red];"));
        assert!(dot.contains("\"JD1961\" -- \"JD1990\";"));
        assert!(dot.contains("\"MD1963\" -- \"JD1990\";"));
    }
}
