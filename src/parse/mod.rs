//! Parse phase: JSON text → generic value tree.
//!
//! The document is deliberately kept as an untyped `serde_json::Value`:
//! the validator type-checks every field itself so that a wrong shape
//! becomes a reported issue instead of a deserialization failure. The
//! `preserve_order` feature keeps `nodes` in document order, which the
//! issue ordering depends on.

pub mod graph;

pub use graph::DialogueGraph;

use serde_json::Value;

use crate::error::ParseError;

/// Deserialize dialogue JSON into a value tree.
pub fn parse(source: &str) -> Result<Value, ParseError> {
    serde_json::from_str(source).map_err(ParseError::from)
}

/// Split source text into the raw line view consumed by the line locator.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_line_and_column() {
        let err = parse("{\n  \"start\": oops\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.column > 0);
    }

    #[test]
    fn nodes_keep_document_order() {
        let doc = parse(r#"{"nodes":{"z":{},"a":{},"m":{}}}"#).unwrap();
        let keys: Vec<&String> = doc["nodes"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
