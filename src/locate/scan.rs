//! Block scanning primitives for the line locator.
//!
//! Everything here works on raw text lines with anchored key patterns and
//! paired-delimiter counting. The counting is a plain character scan with
//! no string-literal awareness; that imprecision is part of the locator's
//! contract.

use regex::Regex;

/// Pattern for a JSON object key, tolerating whitespace inside the quotes
/// and before the colon: `"  key " :`.
pub fn key_pattern(key: &str) -> Option<Regex> {
    Regex::new(&format!(r#""\s*{}\s*"\s*:"#, regex::escape(key))).ok()
}

fn object_key_pattern(key: &str) -> Option<Regex> {
    Regex::new(&format!(r#""\s*{}\s*"\s*:\s*\{{"#, regex::escape(key))).ok()
}

fn array_key_pattern(key: &str) -> Option<Regex> {
    Regex::new(&format!(r#""\s*{}\s*"\s*:\s*\["#, regex::escape(key))).ok()
}

/// Index of the first line in `[start, end)` matching `rx`.
pub fn find_line(lines: &[&str], rx: &Regex, start: usize, end: usize) -> Option<usize> {
    let end = end.min(lines.len());
    lines
        .get(start..end)?
        .iter()
        .position(|line| rx.is_match(line))
        .map(|offset| start + offset)
}

/// Locate the `{ ... }` block opened by `"key": {` within `[start, end)`.
/// Returns inclusive line indices; an unclosed block runs to `end - 1`.
pub fn find_object_block(
    lines: &[&str],
    key: &str,
    start: usize,
    end: usize,
) -> Option<(usize, usize)> {
    let rx = object_key_pattern(key)?;
    let start_idx = find_line(lines, &rx, start, end)?;
    Some(close_block(lines, start_idx, end, '{', '}'))
}

/// Locate the `[ ... ]` block opened by `"key": [` within `[start, end)`.
pub fn find_array_block(
    lines: &[&str],
    key: &str,
    start: usize,
    end: usize,
) -> Option<(usize, usize)> {
    let rx = array_key_pattern(key)?;
    let start_idx = find_line(lines, &rx, start, end)?;
    Some(close_block(lines, start_idx, end, '[', ']'))
}

fn close_block(
    lines: &[&str],
    start_idx: usize,
    end: usize,
    open: char,
    close: char,
) -> (usize, usize) {
    let end = end.min(lines.len());
    let mut depth: i64 = 0;
    let mut started = false;

    for i in start_idx..end {
        for ch in lines[i].chars() {
            if ch == open {
                depth += 1;
                started = true;
            } else if ch == close {
                depth -= 1;
            }
        }
        if started && depth == 0 {
            return (start_idx, i);
        }
    }

    (start_idx, end.saturating_sub(1))
}

/// Partition an array's line range (inclusive) into its consecutive
/// top-level `{ ... }` object blocks, in order.
pub fn object_blocks_within(
    lines: &[&str],
    start: usize,
    end_inclusive: usize,
) -> Vec<(usize, usize)> {
    let mut blocks = Vec::new();
    let mut depth: i64 = 0;
    let mut block_start: Option<usize> = None;

    let last = end_inclusive.min(lines.len().saturating_sub(1));
    for (i, line) in lines.iter().enumerate().take(last + 1).skip(start) {
        for ch in line.chars() {
            if ch == '{' {
                if depth == 0 {
                    block_start = Some(i);
                }
                depth += 1;
            } else if ch == '}' {
                depth -= 1;
                if depth == 0 {
                    if let Some(open_line) = block_start.take() {
                        blocks.push((open_line, i));
                    }
                }
            }
        }
    }

    blocks
}
