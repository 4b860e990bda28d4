//! Same-as answer mirroring.
//!
//! Some questions ask STAFF and PA respondents about "your supervisor" where
//! the manager questionnaire asks about the respondent directly; the answers
//! live in different columns but mean the same thing. This stage mirrors the
//! source answer into the destination column for those rows.

use survey_model::{FormatCategory, ResolvedHeader, Result, RuleSet};
use tracing::debug;

/// Copies applied by the same-as stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    pub copies: usize,
}

/// Mirror paired answers for STAFF and PA rows.
///
/// A copy runs only when both columns are within the row and the source cell
/// is non-empty; it always overwrites the destination, which is a pure
/// mirror of the source and never independently edited. Fails before
/// touching any row when the header has no `"1"` column.
pub fn copy_same_as(
    header: &ResolvedHeader,
    rules: &RuleSet,
    rows: &mut [Vec<String>],
) -> Result<CopyOutcome> {
    let start = header.question_start()?;
    let mut outcome = CopyOutcome::default();
    for row in rows.iter_mut() {
        let Some(role) = row.get(header.role) else {
            continue;
        };
        let category = FormatCategory::from_role(role);
        if !matches!(category, FormatCategory::Staff | FormatCategory::Pa) {
            continue;
        }
        for rule in &rules.same_as {
            let Some(source) = (start + rule.source as usize).checked_sub(1) else {
                continue;
            };
            let Some(destination) = (start + rule.destination as usize).checked_sub(1) else {
                continue;
            };
            if source >= row.len() || destination >= row.len() || row[source].is_empty() {
                continue;
            }
            row[destination] = row[source].clone();
            outcome.copies += 1;
        }
    }
    debug!(copies = outcome.copies, "same-as copy complete");
    Ok(outcome)
}
