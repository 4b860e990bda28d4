//! Survey-format classification.
//!
//! Every respondent answers one of three question subsets, selected purely
//! from the role label on their row. Classification never consults prior
//! state, so reapplying it is always safe.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role label that maps to [`FormatCategory::Manager`].
pub const ROLE_STORE_MANAGER: &str = "store manager";

const ROLE_FULL_TIME: &str = "full-time employee";
const ROLE_GENERAL: &str = "general employee";
const ROLE_PART_TIME: &str = "part-time";
const ROLE_TEMPORARY: &str = "temporary";

/// Closed classification of a respondent's applicable question subset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatCategory {
    /// Store managers answer the full question set.
    Manager,
    /// Full-time and general employees.
    Staff,
    /// Part-time and temporary staff.
    Pa,
}

impl FormatCategory {
    /// Classify a role label.
    ///
    /// Unrecognized labels, including the empty string, fall back to `Staff`
    /// rather than raising; the fallback silently absorbs data-entry typos
    /// into the most permissive category.
    pub fn from_role(role: &str) -> Self {
        if role == ROLE_STORE_MANAGER {
            Self::Manager
        } else if role == ROLE_FULL_TIME || role == ROLE_GENERAL {
            Self::Staff
        } else if role.contains(ROLE_PART_TIME) || role.contains(ROLE_TEMPORARY) {
            Self::Pa
        } else {
            Self::Staff
        }
    }

    /// The value written into the dataset's format column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "MANAGER",
            Self::Staff => "STAFF",
            Self::Pa => "PA",
        }
    }
}

impl fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_role_is_exact() {
        assert_eq!(
            FormatCategory::from_role("store manager"),
            FormatCategory::Manager
        );
        // Substring is not enough for the manager label.
        assert_eq!(
            FormatCategory::from_role("assistant store manager trainee"),
            FormatCategory::Staff
        );
    }

    #[test]
    fn staff_roles() {
        assert_eq!(
            FormatCategory::from_role("full-time employee"),
            FormatCategory::Staff
        );
        assert_eq!(
            FormatCategory::from_role("general employee"),
            FormatCategory::Staff
        );
    }

    #[test]
    fn pa_roles_match_by_substring() {
        assert_eq!(
            FormatCategory::from_role("part-time worker"),
            FormatCategory::Pa
        );
        assert_eq!(
            FormatCategory::from_role("temporary staff"),
            FormatCategory::Pa
        );
        assert_eq!(
            FormatCategory::from_role("seasonal temporary"),
            FormatCategory::Pa
        );
    }

    #[test]
    fn unknown_and_empty_default_to_staff() {
        assert_eq!(FormatCategory::from_role(""), FormatCategory::Staff);
        assert_eq!(
            FormatCategory::from_role("district supervisor"),
            FormatCategory::Staff
        );
    }

    #[test]
    fn wire_strings() {
        assert_eq!(FormatCategory::Manager.as_str(), "MANAGER");
        assert_eq!(FormatCategory::Staff.as_str(), "STAFF");
        assert_eq!(FormatCategory::Pa.as_str(), "PA");
    }
}
