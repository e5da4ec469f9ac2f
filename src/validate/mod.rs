//! Validation phase: structural + semantic checks over the value tree.
//!
//! Runs the document-level rules, then the per-node rules (which record
//! transitions and flag usage as a side product), then the graph and
//! flag-flow analyses over what was recorded.

pub mod flags;
pub mod node_rules;
pub mod reachability;
pub mod structural;

use std::collections::{BTreeSet, HashSet};

use serde_json::Value;

use crate::issue::Issue;
use crate::parse::DialogueGraph;

/// Working state for one validation run. Built up by the rules, consumed
/// by the analyses, discarded afterwards.
#[derive(Default)]
pub struct Analysis {
    pub issues: Vec<Issue>,
    /// Flags listed in the document's `flags` declaration, trimmed.
    /// Non-empty means closed vocabulary: every used flag must be in here.
    pub declared_flags: HashSet<String>,
    /// Flags referenced by some choice's `requires`.
    pub required_flags: BTreeSet<String>,
    /// Flags listed in some node's `set_flags`.
    pub set_flags: BTreeSet<String>,
    /// Recorded transitions in document order, dangling targets included.
    pub edges: Vec<(String, String)>,
}

/// Validate a dialogue document. Returns all issues found, in rule order;
/// the presenter sorts them afterwards.
pub fn validate(document: &Value) -> Vec<Issue> {
    let mut analysis = Analysis::default();

    // Nothing else is meaningful on a non-object root.
    let Some(root) = document.as_object() else {
        analysis.issues.push(Issue::error(
            "ROOT_TYPE",
            "Document root must be an object",
            "$",
        ));
        return analysis.issues;
    };

    structural::check_start(root, &mut analysis);

    // No node set, no analysis: stop entirely.
    let Some(nodes) = structural::check_nodes(root, &mut analysis) else {
        return analysis.issues;
    };

    structural::collect_declared_flags(root, &mut analysis);
    structural::check_start_exists(root, nodes, &mut analysis);

    for (node_id, node_value) in nodes {
        node_rules::validate_node(node_id, node_value, nodes, &mut analysis);
    }

    let node_ids: Vec<String> = nodes.keys().cloned().collect();
    let graph = DialogueGraph::build(&node_ids, &analysis.edges);

    reachability::report_orphans(root, nodes, &graph, &mut analysis);
    flags::report_required_never_set(&mut analysis);

    analysis.issues
}
