//! Loader-boundary error type.
//!
//! Malformed JSON is the loader's problem and is surfaced before the
//! validator ever runs; findings about well-formed documents are `Issue`s,
//! never errors.

use thiserror::Error;

/// The source text is not valid JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid JSON: {message} (line {line}, column {column})")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}
