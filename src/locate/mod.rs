//! Line locator: logical path → approximate source line.
//!
//! A second pass over the raw text, independent of the parse: the
//! validator keeps no position information, so the locator re-derives one
//! from key patterns and delimiter counting. It is best-effort by
//! construction — on unusual formatting distinct paths may resolve to the
//! same line, and every miss falls back to the nearest enclosing block's
//! start line, then to nothing. It never fails the run.

pub mod scan;

use crate::issue::Issue;

/// Attach a line number to every issue whose path can be mapped back to
/// the source text. A miss leaves the issue untouched.
pub fn locate_lines(issues: &mut [Issue], lines: &[&str]) {
    for issue in issues.iter_mut() {
        if issue.line.is_none() {
            issue.line = line_for_path(&issue.path, lines);
        }
    }
}

/// Best-effort mapping from a logical path to a 1-based source line.
pub fn line_for_path(path: &str, lines: &[&str]) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }

    if path == "$" {
        return Some(1);
    }
    if path == "$.start" {
        return first_key_line(lines, "start");
    }
    if path == "$.flags" || path.starts_with("$.flags[") {
        return first_key_line(lines, "flags");
    }
    if path == "$.nodes" {
        return first_key_line(lines, "nodes");
    }

    let rest = path.strip_prefix("$.nodes.")?;
    let (node_id, remainder) = match rest.split_once('.') {
        Some((id, rem)) => (id, rem),
        None => (rest, ""),
    };

    // The node's block is searched from the `nodes` key line onward, so a
    // node that shadows a top-level key name still resolves into `nodes`.
    let nodes_idx = key_line_index(lines, "nodes", 0);
    let search_from = nodes_idx.unwrap_or(0);
    let Some((node_start, node_end)) =
        scan::find_object_block(lines, node_id, search_from, lines.len())
    else {
        return nodes_idx.map(|i| i + 1);
    };

    if remainder.is_empty() {
        return Some(node_start + 1);
    }

    // Simple field inside the node: next, end, set_flags, speaker, ...
    if is_identifier(remainder) {
        return key_line_within(lines, remainder, node_start, node_end + 1)
            .or(Some(node_start + 1));
    }

    // choices[n].field or choices[n].field[m]
    if let Some((index, field)) = parse_choice_path(remainder) {
        let Some((arr_start, arr_end)) =
            scan::find_array_block(lines, "choices", node_start, node_end + 1)
        else {
            return Some(node_start + 1);
        };
        let blocks = scan::object_blocks_within(lines, arr_start, arr_end);
        if let Some(&(choice_start, choice_end)) = blocks.get(index) {
            return key_line_within(lines, field, choice_start, choice_end + 1)
                .or(Some(choice_start + 1));
        }
        return Some(arr_start + 1);
    }

    // Any other shape: first segment's bare name within the node block.
    let first = remainder
        .split(['.', '['])
        .next()
        .filter(|s| !s.is_empty())?;
    key_line_within(lines, first, node_start, node_end + 1).or(Some(node_start + 1))
}

fn first_key_line(lines: &[&str], key: &str) -> Option<usize> {
    key_line_index(lines, key, 0).map(|i| i + 1)
}

fn key_line_index(lines: &[&str], key: &str, start: usize) -> Option<usize> {
    let rx = scan::key_pattern(key)?;
    scan::find_line(lines, &rx, start, lines.len())
}

fn key_line_within(lines: &[&str], key: &str, start: usize, end: usize) -> Option<usize> {
    let rx = scan::key_pattern(key)?;
    scan::find_line(lines, &rx, start, end).map(|i| i + 1)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse `choices[n].field` with an optional trailing `[m]`. Returns the
/// choice index and the field name; anything else is not a choice path.
fn parse_choice_path(remainder: &str) -> Option<(usize, &str)> {
    let rest = remainder.strip_prefix("choices[")?;
    let (digits, rest) = rest.split_once(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    let rest = rest.strip_prefix('.')?;

    let field = match rest.find('[') {
        Some(pos) => {
            let (field, trailer) = rest.split_at(pos);
            let inner = trailer.strip_prefix('[')?.strip_suffix(']')?;
            if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            field
        }
        None => rest,
    };

    if !is_identifier(field) {
        return None;
    }
    Some((index, field))
}
