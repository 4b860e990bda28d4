//! Command implementations.
//!
//! Every command follows the same shape: load the sheet, resolve the header
//! once, run its stage(s) wholly in memory, then write back. Any failure
//! aborts before the write, so the file on disk is only ever the input or a
//! fully repaired output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{info, info_span};

use survey_ingest::SurveySheet;
use survey_model::{ResolvedHeader, RuleSet};
use survey_transform::{
    FillOptions, copy_same_as, fill_demographics, mask_answers,
};

use crate::cli::{FillArgs, MaskArgs, RulesArgs, RunArgs, SameAsArgs, SynthesisArgs};
use crate::types::RepairResult;

pub fn run_fill(args: &FillArgs) -> Result<RepairResult> {
    let mut job = RepairJob::open(&args.file.file)?;
    let outcome = fill_demographics(&job.header, &mut job.sheet.rows, &fill_options(&args.synthesis));
    let mut result = job.result();
    result.fill = Some(outcome);
    job.finish(args.file.dry_run, result)
}

pub fn run_mask(args: &MaskArgs) -> Result<RepairResult> {
    let mut job = RepairJob::open(&args.file.file)?;
    let rules = load_rules(&args.rules)?;
    let outcome = mask_answers(&job.header, &rules, &mut job.sheet.rows).context("masking stage")?;
    let mut result = job.result();
    result.mask = Some(outcome);
    job.finish(args.file.dry_run, result)
}

pub fn run_same_as(args: &SameAsArgs) -> Result<RepairResult> {
    let mut job = RepairJob::open(&args.file.file)?;
    let rules = load_rules(&args.rules)?;
    let outcome =
        copy_same_as(&job.header, &rules, &mut job.sheet.rows).context("same-as stage")?;
    let mut result = job.result();
    result.same_as = Some(outcome);
    job.finish(args.file.dry_run, result)
}

pub fn run_pipeline(args: &RunArgs) -> Result<RepairResult> {
    let mut job = RepairJob::open(&args.file.file)?;
    let rules = load_rules(&args.rules)?;
    // The question columns gate the whole run: fail before the fill stage
    // mutates anything rather than after.
    job.header.question_start().context("resolve header")?;
    let fill = fill_demographics(&job.header, &mut job.sheet.rows, &fill_options(&args.synthesis));
    let mask = mask_answers(&job.header, &rules, &mut job.sheet.rows).context("masking stage")?;
    let same_as =
        copy_same_as(&job.header, &rules, &mut job.sheet.rows).context("same-as stage")?;
    let mut result = job.result();
    result.fill = Some(fill);
    result.mask = Some(mask);
    result.same_as = Some(same_as);
    job.finish(args.file.dry_run, result)
}

/// A sheet loaded for one command invocation.
struct RepairJob {
    path: PathBuf,
    sheet: SurveySheet,
    header: ResolvedHeader,
}

impl RepairJob {
    fn open(path: &Path) -> Result<Self> {
        let span = info_span!("repair", file = %path.display());
        let _guard = span.enter();
        let sheet =
            SurveySheet::read(path).with_context(|| format!("read {}", path.display()))?;
        let header = ResolvedHeader::resolve(&sheet.header).context("resolve header")?;
        info!(rows = sheet.rows.len(), "sheet loaded");
        Ok(Self {
            path: path.to_path_buf(),
            sheet,
            header,
        })
    }

    fn result(&self) -> RepairResult {
        RepairResult {
            path: self.path.clone(),
            rows: self.sheet.rows.len(),
            ..RepairResult::default()
        }
    }

    fn finish(self, dry_run: bool, mut result: RepairResult) -> Result<RepairResult> {
        result.dry_run = dry_run;
        if dry_run {
            info!("dry run, file left untouched");
            return Ok(result);
        }
        self.sheet
            .write(&self.path)
            .with_context(|| format!("write {}", self.path.display()))?;
        info!(rows = result.rows, "sheet written");
        Ok(result)
    }
}

fn fill_options(args: &SynthesisArgs) -> FillOptions {
    FillOptions {
        seed: args.seed,
        as_of: args.as_of.unwrap_or_else(today),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load_rules(args: &RulesArgs) -> Result<RuleSet> {
    match &args.rules {
        Some(path) => RuleSet::from_path(path).context("load rules"),
        None => Ok(RuleSet::default()),
    }
}
