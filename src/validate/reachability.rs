//! Orphan detection: nodes not reachable from `start`.

use std::collections::HashSet;

use petgraph::visit::Dfs;
use serde_json::{Map, Value};

use super::Analysis;
use crate::issue::Issue;
use crate::parse::DialogueGraph;

/// Warn about every node not reachable from `start`, in document order.
/// Runs only when `start` is a string naming an existing node; with an
/// invalid start there is no meaningful notion of reachability at all.
pub fn report_orphans(
    root: &Map<String, Value>,
    nodes: &Map<String, Value>,
    graph: &DialogueGraph,
    analysis: &mut Analysis,
) {
    let Some(start) = root.get("start").and_then(Value::as_str) else {
        return;
    };
    let Some(&start_idx) = graph.node_indices.get(start) else {
        return;
    };

    // Dfs keeps its own stack; no recursion, no shared state.
    let mut reachable = HashSet::new();
    let mut dfs = Dfs::new(&graph.graph, start_idx);
    while let Some(nx) = dfs.next(&graph.graph) {
        reachable.insert(nx);
    }

    for node_id in nodes.keys() {
        let Some(&idx) = graph.node_indices.get(node_id) else {
            continue;
        };
        if !reachable.contains(&idx) {
            analysis.issues.push(Issue::warning(
                "ORPHAN_NODE",
                format!("Node is not reachable from '{}'", start),
                format!("$.nodes.{}", node_id),
            ));
        }
    }
}
