//! Survey sheet ingestion.
//!
//! Reads and writes the delimited survey export that the repair stages
//! operate on. The stages themselves never touch the filesystem; they receive
//! the loaded [`SurveySheet`] and mutate its rows in place.

pub mod sheet;

pub use sheet::{Result, SheetError, SurveySheet};
