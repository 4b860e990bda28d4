//! The three stages applied in order over one row set, the way the CLI's
//! `run` command drives them.

use chrono::NaiveDate;
use survey_model::{FormatCategory, ResolvedHeader, RuleSet};
use survey_transform::{FillOptions, copy_same_as, fill_demographics, mask_answers};

const QUESTIONS: u32 = 65;

fn header_cells() -> Vec<String> {
    let mut cells: Vec<String> = [
        "respondent id",
        "store code",
        "manager name",
        "role",
        "full name",
        "birth date",
        "age band",
        "format",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    cells.extend((1..=QUESTIONS).map(|n| n.to_string()));
    cells
}

fn data_row(id: &str, store: &str, role: &str, birth: &str) -> Vec<String> {
    let mut row = vec![
        id.to_string(),
        store.to_string(),
        String::new(),
        role.to_string(),
        String::new(),
        birth.to_string(),
        String::new(),
        String::new(),
    ];
    row.extend((1..=QUESTIONS).map(|n| format!("v{n}")));
    row
}

#[test]
fn full_pipeline_upholds_the_stage_contracts() {
    let cells = header_cells();
    let header = ResolvedHeader::resolve(&cells).expect("resolve header");
    let rules = RuleSet::default();
    let mut rows = vec![
        data_row("1", "S01", "store manager", "1975-06-01"),
        data_row("2", "S01", "full-time employee", "1992/4/30"),
        data_row("3", "S02", "part-time worker", "2004-12-24"),
        data_row("4", "S02", "", "not a date"),
    ];

    let options = FillOptions {
        seed: Some(42),
        as_of: NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date"),
    };
    let fill = fill_demographics(&header, &mut rows, &options);
    let mask = mask_answers(&header, &rules, &mut rows).expect("mask");
    let copy = copy_same_as(&header, &rules, &mut rows).expect("copy");

    assert_eq!(fill.stores, 2);
    assert_eq!(fill.full_names, 4);

    // format(row) == classify(role(row)) for every row.
    for row in &rows {
        assert_eq!(
            row[header.format],
            FormatCategory::from_role(&row[header.role]).as_str()
        );
    }

    // Manager rows keep every answer.
    for number in 1..=QUESTIONS {
        let index = header.question_column(number).expect("column");
        assert_eq!(rows[0][index], format!("v{number}"));
    }

    // STAFF rows lose exactly {43, 44, 45}; the unrecognized role on row 4
    // classifies STAFF and is masked the same way.
    for row_index in [1usize, 3] {
        for number in [43u32, 44, 45] {
            let index = header.question_column(number).expect("column");
            assert_eq!(rows[row_index][index], "");
        }
    }

    // PA rows lose the 19-question set.
    let pa_set = rules
        .masked_questions(FormatCategory::Pa)
        .expect("pa entry");
    for &number in pa_set {
        let index = header.question_column(number).expect("column");
        assert_eq!(rows[2][index], "");
    }
    assert_eq!(mask.staff, 6);
    assert_eq!(mask.pa, 19);
    assert_eq!(mask.manager, 0);

    // Destinations mirror sources for STAFF/PA wherever the source is
    // non-empty.
    for row_index in [1usize, 2, 3] {
        for (source, destination) in [(34u32, 37u32), (35, 38), (36, 39)] {
            let source = header.question_column(source).expect("column");
            let destination = header.question_column(destination).expect("column");
            if !rows[row_index][source].is_empty() {
                assert_eq!(rows[row_index][destination], rows[row_index][source]);
            }
        }
    }
    assert_eq!(copy.copies, 9);

    // Unparseable birth date degrades to an empty age band.
    assert_eq!(rows[3][header.age_band], "");
    // Parseable dates produce decade buckets.
    assert_eq!(rows[0][header.age_band], "50s");
    assert_eq!(rows[2][header.age_band], "20s");

    // Rerunning masking and copying changes nothing further.
    let snapshot = rows.clone();
    let mask_again = mask_answers(&header, &rules, &mut rows).expect("mask again");
    let copy_again = copy_same_as(&header, &rules, &mut rows).expect("copy again");
    assert_eq!(mask_again.total(), 0);
    assert_eq!(copy_again.copies, 9);
    assert_eq!(rows, snapshot);
}
