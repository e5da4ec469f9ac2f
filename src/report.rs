//! Presenter-facing helpers: issue ordering, counts, plain-text report.

use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Level};

pub const NO_ISSUES: &str = "No issues found.";

/// Sort issues by (level rank, code, path). ERROR < WARNING < INFO.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| (a.level, &a.code, &a.path).cmp(&(b.level, &b.code, &b.path)));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

pub fn summary(issues: &[Issue]) -> Summary {
    Summary {
        errors: issues.iter().filter(|i| i.level == Level::Error).count(),
        warnings: issues.iter().filter(|i| i.level == Level::Warning).count(),
        infos: issues.iter().filter(|i| i.level == Level::Info).count(),
    }
}

/// Render the issue list as a plain-text report. Expects the caller to
/// have sorted the issues already.
pub fn render(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return NO_ISSUES.to_string();
    }

    let counts = summary(issues);
    let mut out = String::new();
    out.push_str("=== VALIDATION REPORT ===\n");
    out.push_str(&format!(
        "Errors: {} | Warnings: {} | Info: {}\n\n",
        counts.errors, counts.warnings, counts.infos
    ));

    for issue in issues {
        out.push_str(&format!("[{}] {}\n", issue.level, issue.code));
        out.push_str(&format!("  {}\n", issue.message));
        out.push_str(&format!("  path: {}\n", issue.path));
        if let Some(line) = issue.line {
            out.push_str(&format!("  line: {}\n", line));
        }
        out.push('\n');
    }

    out
}
