use dialogue_checker::issue::Issue;
use dialogue_checker::validate;
use serde_json::Value;

/// Validate a document and return its issues in emission order.
pub fn issues_for(doc: &Value) -> Vec<Issue> {
    validate::validate(doc)
}

pub fn codes(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.code.as_str()).collect()
}

pub fn has_code(issues: &[Issue], code: &str) -> bool {
    issues.iter().any(|i| i.code == code)
}

pub fn paths_with_code<'a>(issues: &'a [Issue], code: &str) -> Vec<&'a str> {
    issues
        .iter()
        .filter(|i| i.code == code)
        .map(|i| i.path.as_str())
        .collect()
}
