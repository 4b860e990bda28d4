//! Row repair stages for the survey pipeline.
//!
//! Three stages run over the in-memory row set, each independently
//! invocable and safe to rerun:
//!
//! 1. [`demographics`] fills missing identity fields and rewrites the format
//!    column from the role.
//! 2. [`masking`] blanks answers outside each respondent's survey format.
//! 3. [`same_as`] mirrors role-equivalent answers for STAFF and PA rows.
//!
//! The stages share no state beyond the resolved header; the demographic
//! fill additionally builds its per-store identity cache before touching any
//! row.

pub mod age_band;
pub mod demographics;
pub mod masking;
pub mod names;
pub mod same_as;

pub use age_band::age_band;
pub use demographics::{FillOptions, FillOutcome, fill_demographics};
pub use masking::{MaskOutcome, mask_answers};
pub use same_as::{CopyOutcome, copy_same_as};
