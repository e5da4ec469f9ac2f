//! Per-node rules: `next`, `choices`, `set_flags`, terminal marking.
//!
//! Besides reporting, these rules record the node's outgoing transitions
//! and its flag usage into the `Analysis` for the later graph and
//! flag-flow passes.

use serde_json::{Map, Value};

use super::Analysis;
use crate::issue::Issue;

/// Which usage set a flag list feeds.
#[derive(Clone, Copy)]
enum FlagList {
    Requires,
    SetFlags,
}

impl FlagList {
    fn name(&self) -> &'static str {
        match self {
            FlagList::Requires => "requires",
            FlagList::SetFlags => "set_flags",
        }
    }
}

/// Validate one node. A non-object node is reported and skipped entirely
/// (no edges recorded, no terminal check).
pub fn validate_node(
    node_id: &str,
    node_value: &Value,
    nodes: &Map<String, Value>,
    analysis: &mut Analysis,
) {
    let path = format!("$.nodes.{}", node_id);

    let Some(node) = node_value.as_object() else {
        analysis.issues.push(Issue::error(
            "NODE_TYPE",
            "Each node must be an object",
            path,
        ));
        return;
    };

    let has_next = check_next(node_id, node, nodes, &path, analysis);
    let has_choices = check_choices(node_id, node, nodes, &path, analysis);
    check_flag_list(
        node.get("set_flags"),
        FlagList::SetFlags,
        &path,
        "SET_FLAGS_TYPE",
        analysis,
    );

    // A node that neither advances nor branches must be marked as an end.
    // An empty choices list counts as "no choices".
    let is_end = node.get("end") == Some(&Value::Bool(true));
    if !has_next && !has_choices && !is_end {
        analysis.issues.push(Issue::warning(
            "TERMINAL_NO_END",
            "Terminal node is not marked with 'end': true",
            path,
        ));
    }
}

/// Check `next`, record its edge. Returns whether `next` is a string.
fn check_next(
    node_id: &str,
    node: &Map<String, Value>,
    nodes: &Map<String, Value>,
    path: &str,
    analysis: &mut Analysis,
) -> bool {
    let Some(next) = node.get("next") else {
        return false;
    };
    let Some(target) = next.as_str() else {
        analysis.issues.push(Issue::error(
            "NEXT_TYPE",
            "'next' must be a string",
            format!("{}.next", path),
        ));
        return false;
    };

    analysis
        .edges
        .push((node_id.to_string(), target.to_string()));
    if !nodes.contains_key(target) {
        analysis.issues.push(Issue::error(
            "TARGET_NOT_FOUND",
            format!("'next' points to unknown node '{}'", target),
            format!("{}.next", path),
        ));
    }
    true
}

/// Check the `choices` list, recording choice edges and required flags.
/// Returns whether `choices` is a non-empty list.
fn check_choices(
    node_id: &str,
    node: &Map<String, Value>,
    nodes: &Map<String, Value>,
    path: &str,
    analysis: &mut Analysis,
) -> bool {
    let Some(choices) = node.get("choices") else {
        return false;
    };
    let Some(entries) = choices.as_array() else {
        analysis.issues.push(Issue::error(
            "CHOICES_TYPE",
            "'choices' must be a list",
            format!("{}.choices", path),
        ));
        return false;
    };

    for (i, entry) in entries.iter().enumerate() {
        let choice_path = format!("{}.choices[{}]", path, i);

        let Some(choice) = entry.as_object() else {
            analysis.issues.push(Issue::error(
                "CHOICE_TYPE",
                "Each choice must be an object",
                choice_path,
            ));
            continue;
        };

        if !matches!(choice.get("text"), Some(Value::String(_))) {
            analysis.issues.push(Issue::error(
                "CHOICE_TEXT",
                "Choice has no valid 'text'",
                format!("{}.text", choice_path),
            ));
        }

        match choice.get("next").and_then(Value::as_str) {
            Some(target) => {
                analysis
                    .edges
                    .push((node_id.to_string(), target.to_string()));
                if !nodes.contains_key(target) {
                    analysis.issues.push(Issue::error(
                        "TARGET_NOT_FOUND",
                        format!("Choice points to unknown node '{}'", target),
                        format!("{}.next", choice_path),
                    ));
                }
            }
            None => analysis.issues.push(Issue::error(
                "CHOICE_NEXT",
                "Choice has no valid 'next'",
                format!("{}.next", choice_path),
            )),
        }

        check_flag_list(
            choice.get("requires"),
            FlagList::Requires,
            &choice_path,
            "REQUIRES_TYPE",
            analysis,
        );
    }

    !entries.is_empty()
}

/// Shared per-entry validation for `requires` and `set_flags`: every
/// entry must be a non-blank string, and under a closed vocabulary every
/// entry must be declared. Valid entries join the matching usage set.
fn check_flag_list(
    value: Option<&Value>,
    list: FlagList,
    base_path: &str,
    type_code: &str,
    analysis: &mut Analysis,
) {
    let Some(value) = value else {
        return;
    };
    let Some(entries) = value.as_array() else {
        analysis.issues.push(Issue::error(
            type_code,
            format!("'{}' must be a list", list.name()),
            format!("{}.{}", base_path, list.name()),
        ));
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        let entry_path = format!("{}.{}[{}]", base_path, list.name(), i);
        match entry.as_str().map(str::trim) {
            Some(name) if !name.is_empty() => {
                if !analysis.declared_flags.is_empty() && !analysis.declared_flags.contains(name) {
                    analysis.issues.push(Issue::error(
                        "FLAG_NOT_DECLARED",
                        format!("Flag '{}' used in '{}' but never declared", name, list.name()),
                        entry_path,
                    ));
                }
                match list {
                    FlagList::Requires => analysis.required_flags.insert(name.to_string()),
                    FlagList::SetFlags => analysis.set_flags.insert(name.to_string()),
                };
            }
            _ => analysis.issues.push(Issue::error(
                "FLAG_INVALID",
                format!("Flag entries in '{}' must be non-blank strings", list.name()),
                entry_path,
            )),
        }
    }
}
