// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tabular input — header-driven CSV rows, one subject record per row.
//
// Recognised columns: `template`, `name`, `profile-pic` (older sheets call it
// `profile-pic-path`), and an optional `back-cover` (`light` / `dark`).

use std::path::{Path, PathBuf};

use cardpress_core::error::{CardpressError, Result};
use cardpress_core::types::{BackCover, SubjectRecord, TemplateRef};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRow {
    template: String,
    name: String,
    #[serde(default, rename = "profile-pic", alias = "profile-pic-path")]
    profile_pic: Option<String>,
    #[serde(default, rename = "back-cover")]
    back_cover: Option<BackCover>,
}

impl From<CsvRow> for SubjectRecord {
    fn from(row: CsvRow) -> Self {
        SubjectRecord::new(TemplateRef::new(row.template), row.name)
            .with_photo(row.profile_pic.map(PathBuf::from))
            .with_back_cover(row.back_cover)
    }
}

/// Stream the subject records of a CSV file, in file order.
///
/// Opening the file or decoding a row fails with `CardpressError::Csv`.
pub fn records(path: &Path) -> Result<impl Iterator<Item = Result<SubjectRecord>> + use<>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| CardpressError::Csv(format!("{}: {}", path.display(), err)))?;
    debug!(path = %path.display(), "CSV opened");

    let source = path.display().to_string();
    Ok(reader.into_deserialize::<CsvRow>().map(move |row| {
        row.map(SubjectRecord::from)
            .map_err(|err| CardpressError::Csv(format!("{source}: {err}")))
    }))
}
