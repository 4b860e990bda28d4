//! Format-conditioned answer masking.
//!
//! Blanks the answers a respondent's survey format never asked for. Masking
//! an already-empty cell is a no-op, so reapplying the stage leaves rows
//! unchanged.

use survey_model::{FormatCategory, ResolvedHeader, Result, RuleSet};
use tracing::debug;

/// Cells blanked per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskOutcome {
    pub manager: usize,
    pub staff: usize,
    pub pa: usize,
}

impl MaskOutcome {
    pub fn total(&self) -> usize {
        self.manager + self.staff + self.pa
    }

    fn counter_mut(&mut self, category: FormatCategory) -> &mut usize {
        match category {
            FormatCategory::Manager => &mut self.manager,
            FormatCategory::Staff => &mut self.staff,
            FormatCategory::Pa => &mut self.pa,
        }
    }
}

/// Blank format-inappropriate answers in place.
///
/// Each row's category is classified from its role field; a category with no
/// entry in the rule table leaves the row untouched. Fails before touching
/// any row when the header has no `"1"` column.
pub fn mask_answers(
    header: &ResolvedHeader,
    rules: &RuleSet,
    rows: &mut [Vec<String>],
) -> Result<MaskOutcome> {
    let start = header.question_start()?;
    let mut outcome = MaskOutcome::default();
    for row in rows.iter_mut() {
        let Some(role) = row.get(header.role) else {
            continue;
        };
        let category = FormatCategory::from_role(role);
        let Some(questions) = rules.masked_questions(category) else {
            continue;
        };
        for &number in questions {
            let Some(index) = (start + number as usize).checked_sub(1) else {
                continue;
            };
            if let Some(cell) = row.get_mut(index)
                && !cell.is_empty()
            {
                cell.clear();
                *outcome.counter_mut(category) += 1;
            }
        }
    }
    debug!(
        manager = outcome.manager,
        staff = outcome.staff,
        pa = outcome.pa,
        "masking complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use survey_model::ModelError;

    use super::*;

    // store code, role, manager name, full name, birth date, age band,
    // format, then questions 1..=45.
    fn header_cells() -> Vec<String> {
        let mut cells: Vec<String> = [
            "store code",
            "role",
            "manager name",
            "full name",
            "birth date",
            "age band",
            "format",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        cells.extend((1..=45).map(|n| n.to_string()));
        cells
    }

    fn header() -> ResolvedHeader {
        ResolvedHeader::resolve(&header_cells()).expect("resolve header")
    }

    fn row_with_role(role: &str) -> Vec<String> {
        let mut row = vec![String::new(); 7];
        row[1] = role.to_string();
        row.extend((1..=45).map(|n| format!("a{n}")));
        row
    }

    #[test]
    fn staff_questions_are_blanked() {
        let header = header();
        let mut rows = vec![row_with_role("general employee")];
        let outcome = mask_answers(&header, &RuleSet::default(), &mut rows).expect("mask");
        assert_eq!(outcome.staff, 3);
        for number in [43u32, 44, 45] {
            let index = header.question_column(number).expect("column");
            assert_eq!(rows[0][index], "");
        }
        // Question 42 is untouched.
        let kept = header.question_column(42).expect("column");
        assert_eq!(rows[0][kept], "a42");
    }

    #[test]
    fn manager_rows_are_never_blanked() {
        let header = header();
        let mut rows = vec![row_with_role("store manager")];
        let outcome = mask_answers(&header, &RuleSet::default(), &mut rows).expect("mask");
        assert_eq!(outcome.total(), 0);
        assert!(rows[0][7..].iter().all(|cell| !cell.is_empty()));
    }

    #[test]
    fn pa_set_is_blanked_where_in_bounds() {
        let header = header();
        let mut rows = vec![row_with_role("part-time worker")];
        let outcome = mask_answers(&header, &RuleSet::default(), &mut rows).expect("mask");
        // The PA set has 19 entries but the row only holds questions 1..=45.
        assert_eq!(outcome.pa, 10);
        for number in [6u32, 17, 18, 19, 26, 29, 30, 43, 44, 45] {
            let index = header.question_column(number).expect("column");
            assert_eq!(rows[0][index], "");
        }
    }

    #[test]
    fn masking_is_idempotent() {
        let header = header();
        let mut rows = vec![row_with_role("general employee")];
        mask_answers(&header, &RuleSet::default(), &mut rows).expect("first pass");
        let snapshot = rows.clone();
        let second = mask_answers(&header, &RuleSet::default(), &mut rows).expect("second pass");
        assert_eq!(second.total(), 0);
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn category_without_a_rule_entry_is_untouched() {
        let header = header();
        let rules = RuleSet {
            masking: BTreeMap::from([(FormatCategory::Pa, BTreeSet::from([1]))]),
            same_as: Vec::new(),
        };
        let mut rows = vec![row_with_role("general employee")];
        let outcome = mask_answers(&header, &rules, &mut rows).expect("mask");
        assert_eq!(outcome.total(), 0);
        assert_eq!(rows[0][7], "a1");
    }

    #[test]
    fn missing_question_column_aborts_without_mutation() {
        let cells: Vec<String> = header_cells().into_iter().take(7).collect();
        let header = ResolvedHeader::resolve(&cells).expect("resolve");
        let mut rows = vec![row_with_role("general employee")];
        let snapshot = rows.clone();
        let error =
            mask_answers(&header, &RuleSet::default(), &mut rows).expect_err("must abort");
        assert!(matches!(error, ModelError::MissingColumn(name) if name == "1"));
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn short_rows_are_skipped() {
        let header = header();
        let mut rows = vec![vec!["S01".to_string()]];
        let outcome = mask_answers(&header, &RuleSet::default(), &mut rows).expect("mask");
        assert_eq!(outcome.total(), 0);
    }
}
