//! Demographic fill stage.
//!
//! Fills the identity fields the export left empty: the per-store manager
//! name, the respondent's full name and age band, and the survey-format
//! column, which is always recomputed from the role. Fields that already
//! hold a value are never regenerated, so rerunning the stage with the same
//! seed is a no-op on previously filled rows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use survey_model::{FormatCategory, ResolvedHeader};
use tracing::debug;

use crate::age_band::age_band;
use crate::names::{self};

/// Gender weighting for per-store manager identities.
const MANAGER_IDENTITY_MALE_PROBABILITY: f64 = 0.5;
/// Gender weighting for respondents holding the manager role.
const STORE_MANAGER_MALE_PROBABILITY: f64 = 0.7;
/// Gender weighting for all other respondents.
const RESPONDENT_MALE_PROBABILITY: f64 = 0.5;

/// Options for the demographic fill stage.
#[derive(Debug, Clone, Copy)]
pub struct FillOptions {
    /// Fixed seed for reproducible synthesis; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Reference date for age-band computation.
    pub as_of: NaiveDate,
}

/// Counts reported by the demographic fill stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// Rows long enough to be processed.
    pub rows: usize,
    /// Distinct store codes in the identity cache.
    pub stores: usize,
    /// Manager-name cells filled from the cache.
    pub manager_names: usize,
    /// Full-name cells synthesized.
    pub full_names: usize,
    /// Age-band cells computed.
    pub age_bands: usize,
    /// Format cells whose value changed.
    pub formats: usize,
}

/// Fill missing demographic fields across the whole row set.
///
/// The store-identity cache is built over all rows before any row is
/// mutated, so every row sharing a store code receives the same manager
/// name. One seeded generator covers the cache and all per-row synthesis;
/// identical input and seed reproduce identical values.
pub fn fill_demographics(
    header: &ResolvedHeader,
    rows: &mut [Vec<String>],
    options: &FillOptions,
) -> FillOutcome {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let managers = build_store_managers(header, rows, &mut rng);
    let mut outcome = FillOutcome {
        stores: managers.len(),
        ..FillOutcome::default()
    };
    let extent = fill_extent(header);
    for row in rows.iter_mut() {
        if row.len() <= extent {
            continue;
        }
        outcome.rows += 1;

        let store_code = row[header.store_code].clone();
        if !store_code.is_empty()
            && row[header.manager_name].is_empty()
            && let Some(name) = managers.get(&store_code)
        {
            row[header.manager_name] = name.clone();
            outcome.manager_names += 1;
        }

        let category = FormatCategory::from_role(&row[header.role]);
        if row[header.full_name].is_empty() {
            let male_probability = if category == FormatCategory::Manager {
                STORE_MANAGER_MALE_PROBABILITY
            } else {
                RESPONDENT_MALE_PROBABILITY
            };
            let gender = names::draw_gender(&mut rng, male_probability);
            row[header.full_name] = names::full_name(&mut rng, gender);
            outcome.full_names += 1;
        }

        if row[header.age_band].is_empty() {
            let band = age_band(&row[header.birth_date], options.as_of);
            if !band.is_empty() {
                row[header.age_band] = band;
                outcome.age_bands += 1;
            }
        }

        // The format column is authoritative output, not input: always
        // rewritten from the role.
        if row[header.format] != category.as_str() {
            row[header.format] = category.as_str().to_string();
            outcome.formats += 1;
        }
    }
    debug!(
        stores = outcome.stores,
        manager_names = outcome.manager_names,
        full_names = outcome.full_names,
        age_bands = outcome.age_bands,
        formats = outcome.formats,
        "demographic fill complete"
    );
    outcome
}

/// One manager identity per distinct non-empty store code, in store-code
/// order for a given seed.
fn build_store_managers<R: Rng + ?Sized>(
    header: &ResolvedHeader,
    rows: &[Vec<String>],
    rng: &mut R,
) -> BTreeMap<String, String> {
    let mut managers = BTreeMap::new();
    for row in rows {
        let Some(store_code) = row.get(header.store_code) else {
            continue;
        };
        if store_code.is_empty() || managers.contains_key(store_code) {
            continue;
        }
        let gender = names::draw_gender(rng, MANAGER_IDENTITY_MALE_PROBABILITY);
        managers.insert(store_code.clone(), names::full_name(rng, gender));
    }
    managers
}

/// Highest column index the stage touches; shorter rows are skipped whole.
fn fill_extent(header: &ResolvedHeader) -> usize {
    [
        header.store_code,
        header.role,
        header.manager_name,
        header.full_name,
        header.birth_date,
        header.age_band,
        header.format,
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}
