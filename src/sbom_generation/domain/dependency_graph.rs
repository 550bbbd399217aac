use super::GraphNode;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::HashMap;

/// DependencyGraph aggregate: a read-only snapshot of a resolved install tree
///
/// Nodes keep their input order, which drives the order of packages and
/// relationships in the generated document. Lookups go through an
/// identifier index; on duplicate identifiers the first node wins.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
}

impl DependencyGraph {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            index
                .entry(node.identifier().to_string())
                .or_insert(position);
        }
        Self { nodes, index }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn get(&self, identifier: &str) -> Option<&GraphNode> {
        self.index.get(identifier).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Returns the single root node
    ///
    /// # Errors
    /// [`SbomError::InvariantViolation`] when the graph has no root or more than one
    pub fn root(&self) -> Result<&GraphNode> {
        let mut roots = self.nodes.iter().filter(|n| n.is_root());
        let root = roots.next().ok_or_else(|| SbomError::InvariantViolation {
            details: "no root node found in dependency graph".to_string(),
        })?;

        let extra: Vec<&str> = roots.map(|n| n.identifier()).collect();
        if !extra.is_empty() {
            return Err(SbomError::InvariantViolation {
                details: format!(
                    "found {} root nodes: {}, {}",
                    extra.len() + 1,
                    root.identifier(),
                    extra.join(", ")
                ),
            }
            .into());
        }

        Ok(root)
    }

    /// All non-root nodes in input order
    pub fn children(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| !n.is_root())
    }

    pub fn extraneous(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_extraneous())
    }

    /// Follows a link node to its target
    ///
    /// Non-link nodes resolve to themselves. A link whose target is missing
    /// or not part of this graph does not resolve.
    pub fn resolve<'a>(&'a self, node: &'a GraphNode) -> Option<&'a GraphNode> {
        if !node.is_link() {
            return Some(node);
        }
        node.target().and_then(|target| self.get(target))
    }

    pub fn total_node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges_out().len()).sum()
    }
}
