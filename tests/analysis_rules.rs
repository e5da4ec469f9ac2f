//! Integration tests for the reachability and flag-flow analyses.

mod helpers;

use helpers::{codes, has_code, issues_for, paths_with_code};
use serde_json::json;

#[test]
fn scenario_minimal_valid_document() {
    let issues = issues_for(&json!({"start": "a", "nodes": {"a": {"end": true}}}));
    assert!(issues.is_empty(), "got: {:?}", issues);
}

#[test]
fn scenario_terminal_and_orphan() {
    let issues = issues_for(&json!({"start": "a", "nodes": {"a": {}, "b": {"end": true}}}));
    assert_eq!(paths_with_code(&issues, "TERMINAL_NO_END"), ["$.nodes.a"]);
    assert_eq!(paths_with_code(&issues, "ORPHAN_NODE"), ["$.nodes.b"]);
    assert_eq!(issues.len(), 2);
}

#[test]
fn scenario_invalid_start_disables_orphan_analysis() {
    let issues = issues_for(&json!({"start": "x", "nodes": {"a": {"end": true}}}));
    assert_eq!(codes(&issues), ["START_NOT_FOUND"]);
    assert!(!has_code(&issues, "ORPHAN_NODE"));
}

#[test]
fn scenario_required_flag_never_set() {
    let issues = issues_for(&json!({
        "start": "a",
        "flags": ["has_key"],
        "nodes": {
            "a": {"choices": [{"text": "go", "next": "a", "requires": ["has_key"]}]}
        }
    }));
    assert_eq!(codes(&issues), ["FLAG_REQUIRED_NEVER_SET"]);
    assert_eq!(issues[0].path, "$.nodes");
    assert!(!has_code(&issues, "FLAG_NOT_DECLARED"));
}

#[test]
fn scenario_dangling_choice_target_is_not_a_node() {
    let issues = issues_for(&json!({
        "start": "a",
        "nodes": {"a": {"choices": [{"text": "go", "next": "missing"}]}}
    }));
    assert_eq!(
        paths_with_code(&issues, "TARGET_NOT_FOUND"),
        ["$.nodes.a.choices[0].next"]
    );
    // The dangling id is neither reachable nor orphaned; it is not a node.
    assert!(!has_code(&issues, "ORPHAN_NODE"));
    assert_eq!(issues.len(), 1);
}

#[test]
fn orphans_are_exactly_the_unreachable_nodes() {
    // a -> b -> a is a cycle; c -> d hangs off an unreachable island.
    let issues = issues_for(&json!({
        "start": "a",
        "nodes": {
            "a": {"next": "b"},
            "b": {"next": "a"},
            "c": {"next": "d"},
            "d": {"end": true}
        }
    }));
    assert_eq!(
        paths_with_code(&issues, "ORPHAN_NODE"),
        ["$.nodes.c", "$.nodes.d"]
    );
}

#[test]
fn choice_edges_count_for_reachability() {
    let issues = issues_for(&json!({
        "start": "a",
        "nodes": {
            "a": {"choices": [{"text": "go", "next": "b"}]},
            "b": {"end": true}
        }
    }));
    assert!(!has_code(&issues, "ORPHAN_NODE"));
}

#[test]
fn start_with_no_edges_is_not_an_orphan() {
    let issues = issues_for(&json!({"start": "a", "nodes": {"a": {"end": true}, "b": {"end": true}}}));
    assert_eq!(paths_with_code(&issues, "ORPHAN_NODE"), ["$.nodes.b"]);
}

#[test]
fn required_never_set_is_sorted_ascending() {
    let issues = issues_for(&json!({
        "start": "a",
        "nodes": {
            "a": {
                "choices": [
                    {"text": "x", "next": "a", "requires": ["zeta", "alpha"]},
                    {"text": "y", "next": "a", "requires": ["mid"]}
                ]
            }
        }
    }));
    let messages: Vec<&str> = issues
        .iter()
        .filter(|i| i.code == "FLAG_REQUIRED_NEVER_SET")
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].contains("'alpha'"));
    assert!(messages[1].contains("'mid'"));
    assert!(messages[2].contains("'zeta'"));
}

#[test]
fn a_set_flag_satisfies_every_requirement_of_it() {
    let issues = issues_for(&json!({
        "start": "a",
        "nodes": {
            "a": {
                "set_flags": ["has_key"],
                "choices": [{"text": "go", "next": "b", "requires": ["has_key"]}]
            },
            "b": {
                "choices": [{"text": "again", "next": "b", "requires": ["has_key"]}]
            }
        }
    }));
    assert!(!has_code(&issues, "FLAG_REQUIRED_NEVER_SET"), "got: {:?}", issues);
}

#[test]
fn flag_usage_is_trimmed_before_set_algebra() {
    let issues = issues_for(&json!({
        "start": "a",
        "nodes": {
            "a": {
                "set_flags": ["key "],
                "choices": [{"text": "go", "next": "a", "requires": [" key"]}]
            }
        }
    }));
    assert!(!has_code(&issues, "FLAG_REQUIRED_NEVER_SET"), "got: {:?}", issues);
}

#[test]
fn validation_is_idempotent() {
    let doc = json!({
        "start": "intro",
        "flags": ["a_flag"],
        "nodes": {
            "intro": {"next": "gone", "choices": [{"text": "x", "next": "intro", "requires": ["a_flag"]}]},
            "stray": {}
        }
    });
    let first = issues_for(&doc);
    let second = issues_for(&doc);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
