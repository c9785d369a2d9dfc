// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Directory-of-photos input — every image file becomes one ID card record,
// named after its file.

use std::path::{Path, PathBuf};

use cardpress_core::error::Result;
use cardpress_core::naming::title_case_from_file_name;
use cardpress_core::types::{BackCover, SubjectRecord, TemplateRef};
use tracing::debug;

/// Build one record per image file in `dir`, sorted by file name.
///
/// Files are recognised as images by extension; anything else is ignored.
pub fn records(
    dir: &Path,
    template: &TemplateRef,
    back_cover: Option<BackCover>,
) -> Result<Vec<SubjectRecord>> {
    let mut photos: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && image::ImageFormat::from_path(path).is_ok())
        .collect();
    photos.sort();
    debug!(dir = %dir.display(), photos = photos.len(), "Photo directory scanned");

    Ok(photos
        .into_iter()
        .filter_map(|path| {
            let file_name = path.file_name()?.to_str()?.to_owned();
            Some(
                SubjectRecord::new(template.clone(), title_case_from_file_name(&file_name))
                    .with_photo(Some(path))
                    .with_back_cover(back_cover),
            )
        })
        .collect())
}
