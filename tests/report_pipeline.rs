//! End-to-end pipeline tests: parse → validate → locate → sort → render.

use dialogue_checker::issue::Level;
use dialogue_checker::{locate, parse, report, validate};

fn check(source: &str) -> Vec<dialogue_checker::issue::Issue> {
    let doc = parse::parse(source).expect("Should parse");
    let mut issues = validate::validate(&doc);
    let lines = parse::split_lines(source);
    locate::locate_lines(&mut issues, &lines);
    report::sort_issues(&mut issues);
    issues
}

#[test]
fn clean_document_renders_the_no_issues_report() {
    let issues = check(include_str!("fixtures/example_dialogue.json"));
    assert!(issues.is_empty(), "got: {:?}", issues);
    insta::assert_snapshot!(report::render(&issues), @"No issues found.");
}

#[test]
fn broken_document_yields_the_expected_sorted_findings() {
    let issues = check(include_str!("fixtures/broken_dialogue.json"));

    let findings: Vec<(&str, &str, Option<usize>)> = issues
        .iter()
        .map(|i| (i.code.as_str(), i.path.as_str(), i.line))
        .collect();

    assert_eq!(
        findings,
        [
            ("CHOICE_TEXT", "$.nodes.cell.choices[1].text", Some(21)),
            ("CHOICE_TYPE", "$.nodes.cell.choices[2]", Some(14)),
            ("FLAG_INVALID", "$.flags[1]", Some(3)),
            ("FLAG_NOT_DECLARED", "$.nodes.intro.set_flags[0]", Some(11)),
            ("TARGET_NOT_FOUND", "$.nodes.cell.choices[0].next", Some(17)),
            ("FLAG_REQUIRED_NEVER_SET", "$.nodes", Some(7)),
            ("ORPHAN_NODE", "$.nodes.limbo", Some(27)),
            ("TERMINAL_NO_END", "$.nodes.limbo", Some(27)),
        ]
    );
}

#[test]
fn errors_sort_before_warnings() {
    let issues = check(include_str!("fixtures/broken_dialogue.json"));
    let first_warning = issues
        .iter()
        .position(|i| i.level == Level::Warning)
        .expect("fixture has warnings");
    assert!(issues[..first_warning].iter().all(|i| i.level == Level::Error));
    assert!(issues[first_warning..].iter().all(|i| i.level == Level::Warning));
}

#[test]
fn summary_counts_by_level() {
    let issues = check(include_str!("fixtures/broken_dialogue.json"));
    let summary = report::summary(&issues);
    assert_eq!(summary.errors, 5);
    assert_eq!(summary.warnings, 3);
    assert_eq!(summary.infos, 0);
}

#[test]
fn rendered_report_carries_paths_and_lines() {
    let issues = check(include_str!("fixtures/broken_dialogue.json"));
    let text = report::render(&issues);
    assert!(text.starts_with("=== VALIDATION REPORT ===\n"));
    assert!(text.contains("Errors: 5 | Warnings: 3 | Info: 0"));
    assert!(text.contains("[ERROR] TARGET_NOT_FOUND"));
    assert!(text.contains("path: $.nodes.cell.choices[0].next"));
    assert!(text.contains("line: 17"));
    assert!(text.contains("[WARNING] ORPHAN_NODE"));
}

#[test]
fn malformed_json_is_a_loader_error_not_an_issue() {
    let err = parse::parse("{\"start\": }").unwrap_err();
    assert_eq!(err.line, 1);
    let rendered = err.to_string();
    assert!(rendered.contains("line 1"), "got: {}", rendered);
}
