//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::issue::Issue;
use crate::report::Summary;
use crate::{locate, parse, report, validate};

/// Validate a dialogue JSON string: parse + structural/semantic checks.
/// Returns a JSON array of Issue objects, without line enrichment.
#[wasm_bindgen]
pub fn validate_dialogue(json: &str) -> JsValue {
    let result = validate_dialogue_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_dialogue_inner(json: &str) -> Vec<IssueDto> {
    let document = match parse::parse(json) {
        Ok(doc) => doc,
        Err(e) => return vec![parse_failure_dto(&e)],
    };
    validate::validate(&document)
        .into_iter()
        .map(IssueDto::from)
        .collect()
}

/// Full pipeline: parse → validate → locate lines → sort.
/// Returns a JSON object with either the sorted, line-annotated issue
/// list plus summary counts, or the parse failure.
#[wasm_bindgen]
pub fn check_dialogue(json: &str) -> JsValue {
    let result = check_dialogue_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn check_dialogue_inner(json: &str) -> CheckResult {
    let document = match parse::parse(json) {
        Ok(doc) => doc,
        Err(e) => {
            return CheckResult::ParseFailure {
                message: e.message,
                line: e.line,
                column: e.column,
            };
        }
    };

    let mut issues = validate::validate(&document);
    let lines = parse::split_lines(json);
    locate::locate_lines(&mut issues, &lines);
    report::sort_issues(&mut issues);

    CheckResult::Checked {
        summary: report::summary(&issues),
        issues: issues.into_iter().map(IssueDto::from).collect(),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct IssueDto {
    level: String,
    code: String,
    message: String,
    path: String,
    line: Option<usize>,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        IssueDto {
            level: issue.level.to_string(),
            code: issue.code,
            message: issue.message,
            path: issue.path,
            line: issue.line,
        }
    }
}

fn parse_failure_dto(e: &crate::error::ParseError) -> IssueDto {
    IssueDto {
        level: "ERROR".into(),
        code: "PARSE".into(),
        message: e.to_string(),
        path: "$".into(),
        line: Some(e.line),
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CheckResult {
    #[serde(rename = "checked")]
    Checked {
        summary: Summary,
        issues: Vec<IssueDto>,
    },
    #[serde(rename = "parseError")]
    ParseFailure {
        message: String,
        line: usize,
        column: usize,
    },
}
