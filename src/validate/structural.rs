//! Document-level structural rules: `start`, `nodes`, `flags`.

use serde_json::{Map, Value};

use super::Analysis;
use crate::issue::Issue;

/// `start` must be a non-blank string. Validation continues either way.
pub fn check_start(root: &Map<String, Value>, analysis: &mut Analysis) {
    match root.get("start") {
        Some(Value::String(s)) if !s.trim().is_empty() => {}
        _ => analysis.issues.push(Issue::error(
            "MISSING_START",
            "Field 'start' is missing or not a non-blank string",
            "$.start",
        )),
    }
}

/// `nodes` must be a non-empty object. Returns the node map, or `None`
/// after reporting — in which case the whole run stops.
pub fn check_nodes<'a>(
    root: &'a Map<String, Value>,
    analysis: &mut Analysis,
) -> Option<&'a Map<String, Value>> {
    match root.get("nodes").and_then(Value::as_object) {
        Some(nodes) if !nodes.is_empty() => Some(nodes),
        _ => {
            analysis.issues.push(Issue::error(
                "NODES_INVALID",
                "Field 'nodes' is missing, empty, or not an object",
                "$.nodes",
            ));
            None
        }
    }
}

/// Collect the declared-flag set from the optional `flags` list. A
/// non-list value is reported and treated as an empty declaration (open
/// vocabulary); invalid entries are reported individually.
pub fn collect_declared_flags(root: &Map<String, Value>, analysis: &mut Analysis) {
    let Some(flags) = root.get("flags") else {
        return;
    };
    let Some(entries) = flags.as_array() else {
        analysis.issues.push(Issue::error(
            "FLAGS_TYPE",
            "Field 'flags' must be a list",
            "$.flags",
        ));
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        match entry.as_str().map(str::trim) {
            Some(name) if !name.is_empty() => {
                analysis.declared_flags.insert(name.to_string());
            }
            _ => analysis.issues.push(Issue::error(
                "FLAG_INVALID",
                "Flag declarations must be non-blank strings",
                format!("$.flags[{}]", i),
            )),
        }
    }
}

/// A string `start` must name an existing node. Node-level validation
/// continues regardless.
pub fn check_start_exists(
    root: &Map<String, Value>,
    nodes: &Map<String, Value>,
    analysis: &mut Analysis,
) {
    if let Some(Value::String(start)) = root.get("start") {
        if !nodes.contains_key(start) {
            analysis.issues.push(Issue::error(
                "START_NOT_FOUND",
                format!("Start node '{}' does not exist", start),
                "$.start",
            ));
        }
    }
}
