// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch dispatcher — runs the generator once per record, strictly in order,
// and aggregates a run summary.
//
// Skipped records are counted and the batch moves on. Any other error ends
// the run immediately.

use std::path::{Path, PathBuf};

use cardpress_core::error::Result;
use cardpress_core::types::{BackCover, RunSummary, SubjectRecord, TemplateRef};
use cardpress_document::CardGenerator;
use tracing::{info, instrument};

use super::{csv_input, photo_dir};

/// How a run obtains its records.
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// One record per CSV row, written into `output_dir`.
    Csv {
        path: PathBuf,
        output_dir: PathBuf,
    },
    /// One ID card per image file in `photos_dir`, written into `output_dir`.
    Directory {
        template: TemplateRef,
        photos_dir: PathBuf,
        output_dir: PathBuf,
        back_cover: Option<BackCover>,
    },
    /// A single record given on the command line.
    Single {
        record: SubjectRecord,
        output_dir: Option<PathBuf>,
    },
}

/// Execute `mode` with `generator`.
pub fn run(generator: &CardGenerator, mode: &RunMode) -> Result<RunSummary> {
    match mode {
        RunMode::Csv { path, output_dir } => run_csv(generator, path, output_dir),
        RunMode::Directory {
            template,
            photos_dir,
            output_dir,
            back_cover,
        } => run_directory(generator, template, photos_dir, output_dir, *back_cover),
        RunMode::Single { record, output_dir } => {
            run_single(generator, record, output_dir.as_deref())
        }
    }
}

/// Generate one document per CSV row into `output_dir` (created if needed).
#[instrument(skip(generator), fields(kind = generator.kind().label()))]
pub fn run_csv(generator: &CardGenerator, csv_path: &Path, output_dir: &Path) -> Result<RunSummary> {
    std::fs::create_dir_all(output_dir)?;
    let mut summary = RunSummary::new();
    for record in csv_input::records(csv_path)? {
        summary.record(generator.generate(&record?, Some(output_dir))?);
    }
    log_summary(&summary);
    Ok(summary)
}

/// Generate one ID card per photo in `photos_dir` into `output_dir`.
#[instrument(skip(generator))]
pub fn run_directory(
    generator: &CardGenerator,
    template: &TemplateRef,
    photos_dir: &Path,
    output_dir: &Path,
    back_cover: Option<BackCover>,
) -> Result<RunSummary> {
    std::fs::create_dir_all(output_dir)?;
    let mut summary = RunSummary::new();
    for record in photo_dir::records(photos_dir, template, back_cover)? {
        summary.record(generator.generate(&record, Some(output_dir))?);
    }
    log_summary(&summary);
    Ok(summary)
}

/// Generate the document for a single record.
pub fn run_single(
    generator: &CardGenerator,
    record: &SubjectRecord,
    output_dir: Option<&Path>,
) -> Result<RunSummary> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)?;
    }
    let mut summary = RunSummary::new();
    summary.record(generator.generate(record, output_dir)?);
    Ok(summary)
}

fn log_summary(summary: &RunSummary) {
    info!(
        generated = summary.generated_count(),
        skipped = summary.skipped_count(),
        "Batch complete"
    );
}
