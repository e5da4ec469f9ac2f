//! petgraph-based directed graph wrapper for the dialogue document.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

/// The dialogue graph: one petgraph node per node id, one edge per
/// recorded `next`/choice transition whose endpoints both exist.
pub struct DialogueGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl DialogueGraph {
    /// Build the graph from the ordered node-id list and the recorded
    /// transition list. Edges whose target is not a known node id are
    /// skipped: the validator already reported them as dangling, and a
    /// nonexistent target can never be expanded by a traversal.
    pub fn build(node_ids: &[String], edges: &[(String, String)]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for id in node_ids {
            let idx = graph.add_node(id.clone());
            node_indices.insert(id.clone(), idx);
        }

        for (source, target) in edges {
            if let (Some(&s), Some(&t)) = (node_indices.get(source), node_indices.get(target)) {
                graph.add_edge(s, t, ());
            }
        }

        DialogueGraph {
            graph,
            node_indices,
        }
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.node_indices.contains_key(node_id)
    }

    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect()
    }
}
