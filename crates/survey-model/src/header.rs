//! Header resolution.
//!
//! Column identity is resolved by name exactly once per run; every stage then
//! addresses fields by position through the same [`ResolvedHeader`], including
//! the question columns, which are located by arithmetic offset from the
//! column literally labeled `"1"`.

use crate::error::{ModelError, Result};

/// Literal column names required in the header record.
pub mod columns {
    pub const STORE_CODE: &str = "store code";
    pub const ROLE: &str = "role";
    pub const MANAGER_NAME: &str = "manager name";
    pub const FULL_NAME: &str = "full name";
    pub const BIRTH_DATE: &str = "birth date";
    pub const AGE_BAND: &str = "age band";
    pub const FORMAT: &str = "format";
    /// Marks the first question slot; question N sits N-1 columns later.
    pub const FIRST_QUESTION: &str = "1";
}

/// Column positions resolved once from the header record.
///
/// Construction fails with a diagnostic naming the missing column when any of
/// the named fields is absent. The `"1"` column is resolved lazily: the
/// demographic fill stage never needs it, while the masking and same-as
/// stages treat its absence as fatal.
#[derive(Debug, Clone)]
pub struct ResolvedHeader {
    pub store_code: usize,
    pub role: usize,
    pub manager_name: usize,
    pub full_name: usize,
    pub birth_date: usize,
    pub age_band: usize,
    pub format: usize,
    question_start: Option<usize>,
}

impl ResolvedHeader {
    pub fn resolve(header: &[String]) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            header
                .iter()
                .position(|cell| cell == name)
                .ok_or_else(|| ModelError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            store_code: find(columns::STORE_CODE)?,
            role: find(columns::ROLE)?,
            manager_name: find(columns::MANAGER_NAME)?,
            full_name: find(columns::FULL_NAME)?,
            birth_date: find(columns::BIRTH_DATE)?,
            age_band: find(columns::AGE_BAND)?,
            format: find(columns::FORMAT)?,
            question_start: header.iter().position(|cell| cell == columns::FIRST_QUESTION),
        })
    }

    /// Position of the `"1"` column.
    pub fn question_start(&self) -> Result<usize> {
        self.question_start
            .ok_or_else(|| ModelError::MissingColumn(columns::FIRST_QUESTION.to_string()))
    }

    /// Column index holding the answer to the given question number.
    pub fn question_column(&self, number: u32) -> Result<usize> {
        Ok(self.question_start()? + number as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_questions() -> Vec<String> {
        [
            "respondent id",
            "store code",
            "manager name",
            "role",
            "full name",
            "birth date",
            "age band",
            "format",
            "1",
            "2",
            "3",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn resolves_named_columns() {
        let header = ResolvedHeader::resolve(&header_with_questions()).expect("resolve");
        assert_eq!(header.store_code, 1);
        assert_eq!(header.manager_name, 2);
        assert_eq!(header.role, 3);
        assert_eq!(header.format, 7);
    }

    #[test]
    fn question_arithmetic_offsets_from_the_one_column() {
        let header = ResolvedHeader::resolve(&header_with_questions()).expect("resolve");
        assert_eq!(header.question_start().expect("start"), 8);
        assert_eq!(header.question_column(1).expect("q1"), 8);
        assert_eq!(header.question_column(3).expect("q3"), 10);
    }

    #[test]
    fn missing_named_column_is_fatal_and_named() {
        let mut header = header_with_questions();
        header.retain(|cell| cell != "birth date");
        let error = ResolvedHeader::resolve(&header).expect_err("must fail");
        assert!(error.to_string().contains("birth date"));
    }

    #[test]
    fn missing_question_column_only_fails_on_access() {
        let mut header = header_with_questions();
        header.truncate(8);
        let resolved = ResolvedHeader::resolve(&header).expect("named columns resolve");
        let error = resolved.question_start().expect_err("no question start");
        assert!(matches!(error, ModelError::MissingColumn(name) if name == "1"));
    }
}
