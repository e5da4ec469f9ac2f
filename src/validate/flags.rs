//! Flag-flow analysis: flags required by choices but never set.

use super::Analysis;
use crate::issue::Issue;

/// Report `required_used − ever_set`, ascending. The path is the
/// document-level `$.nodes`: a flag may be required by choices in several
/// nodes, so no single node owns the finding.
pub fn report_required_never_set(analysis: &mut Analysis) {
    let never_set: Vec<String> = analysis
        .required_flags
        .difference(&analysis.set_flags)
        .cloned()
        .collect();

    for flag in never_set {
        analysis.issues.push(Issue::warning(
            "FLAG_REQUIRED_NEVER_SET",
            format!("Flag '{}' is required by a choice but never set", flag),
            "$.nodes",
        ));
    }
}
