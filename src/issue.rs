//! Diagnostic issue type shared by all validation phases.

use serde::{Deserialize, Serialize};

/// Issue severity. Variant order doubles as the presenter's sort rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Error => write!(f, "ERROR"),
            Level::Warning => write!(f, "WARNING"),
            Level::Info => write!(f, "INFO"),
        }
    }
}

/// One validation finding. `path` is a logical address into the document
/// (`$.nodes.intro.choices[0].next`); `line` is filled in later by the
/// locator when the raw source text allows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub level: Level,
    pub code: String,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "[{}:{}] {} (at {}, line {})",
                self.level, self.code, self.message, self.path, line
            ),
            None => write!(
                f,
                "[{}:{}] {} (at {})",
                self.level, self.code, self.message, self.path
            ),
        }
    }
}

impl Issue {
    pub fn error(code: &str, message: impl Into<String>, path: impl Into<String>) -> Self {
        Issue {
            level: Level::Error,
            code: code.into(),
            message: message.into(),
            path: path.into(),
            line: None,
        }
    }

    pub fn warning(code: &str, message: impl Into<String>, path: impl Into<String>) -> Self {
        Issue {
            level: Level::Warning,
            code: code.into(),
            message: message.into(),
            path: path.into(),
            line: None,
        }
    }

    pub fn info(code: &str, message: impl Into<String>, path: impl Into<String>) -> Self {
        Issue {
            level: Level::Info,
            code: code.into(),
            message: message.into(),
            path: path.into(),
            line: None,
        }
    }
}
