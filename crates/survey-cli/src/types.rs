//! Result types shared by the command paths and the summary printer.

use std::path::PathBuf;

use survey_transform::{CopyOutcome, FillOutcome, MaskOutcome};

/// Counts gathered over one command invocation.
#[derive(Debug, Clone, Default)]
pub struct RepairResult {
    pub path: PathBuf,
    /// Data rows in the loaded sheet.
    pub rows: usize,
    pub fill: Option<FillOutcome>,
    pub mask: Option<MaskOutcome>,
    pub same_as: Option<CopyOutcome>,
    /// True when `--dry-run` suppressed the write-back.
    pub dry_run: bool,
}
