//! Masking and same-as rule tables.
//!
//! The rule table is fixed per run: either the built-in defaults or a single
//! admin-supplied JSON document that replaces them wholesale. No other rule
//! sources or formats are supported.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::format::FormatCategory;

/// One source → destination answer mirror.
///
/// Applied one-directionally: the destination always takes the source value,
/// never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRule {
    pub source: u32,
    pub destination: u32,
}

/// The per-category masking sets and the same-as copy list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Question numbers blanked per category. A category absent from the map
    /// is left untouched by the masking stage.
    pub masking: BTreeMap<FormatCategory, BTreeSet<u32>>,
    /// Ordered copy pairs, applied to STAFF and PA rows only.
    pub same_as: Vec<CopyRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let mut masking = BTreeMap::new();
        // Managers answer the full question set.
        masking.insert(FormatCategory::Manager, BTreeSet::new());
        masking.insert(FormatCategory::Staff, BTreeSet::from([43, 44, 45]));
        masking.insert(
            FormatCategory::Pa,
            BTreeSet::from([
                6, 17, 18, 19, 26, 29, 30, 43, 44, 45, 49, 51, 54, 55, 56, 57, 58, 59, 60,
            ]),
        );
        Self {
            masking,
            same_as: vec![
                CopyRule {
                    source: 34,
                    destination: 37,
                },
                CopyRule {
                    source: 35,
                    destination: 38,
                },
                CopyRule {
                    source: 36,
                    destination: 39,
                },
            ],
        }
    }
}

impl RuleSet {
    /// Load a replacement rule set from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ModelError::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let rules: Self =
            serde_json::from_str(&contents).map_err(|source| ModelError::RulesParse {
                path: path.to_path_buf(),
                source,
            })?;
        rules.validate(path)?;
        Ok(rules)
    }

    /// Question numbers masked for a category, if the table has an entry.
    pub fn masked_questions(&self, category: FormatCategory) -> Option<&BTreeSet<u32>> {
        self.masking.get(&category)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let masked = self.masking.values().flatten().copied();
        let copied = self
            .same_as
            .iter()
            .flat_map(|rule| [rule.source, rule.destination]);
        if masked.chain(copied).any(|number| number == 0) {
            return Err(ModelError::RulesOutOfRange {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}
