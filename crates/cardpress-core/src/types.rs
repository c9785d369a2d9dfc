// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Cardpress: document kinds and their layout rules,
// subject records, and per-record / per-run outcomes.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardpressError;

/// Horizontal margin kept free of text on ID cards (total, both sides).
pub const ID_TEXT_MARGIN_PX: u32 = 80;
/// Distance between the bottom of the name and the bottom edge of an ID card.
pub const ID_TEXT_BOTTOM_PX: i32 = 100;
/// Fraction of the certificate width the name may occupy.
pub const CERTIFICATE_TEXT_WIDTH_RATIO: f32 = 0.7;
/// Left edge of the name on a certificate.
pub const CERTIFICATE_TEXT_X: i32 = 100;
/// Gap between the name and the vertical centre of a certificate.
pub const CERTIFICATE_TEXT_RISE: i32 = 5;

/// Candidate font sizes for ID card names.
pub const ID_FONT_SIZES: FontSizeRange = FontSizeRange {
    max: 200,
    floor: 10,
    step: 5,
};

/// Candidate font sizes for certificate names.
pub const CERTIFICATE_FONT_SIZES: FontSizeRange = FontSizeRange {
    max: 80,
    floor: 10,
    step: 5,
};

/// Descending sequence of font sizes tried when fitting a name.
///
/// Sizes run `max, max - step, ...` and stop before reaching `floor`
/// (exclusive), so `{200, 10, 5}` yields `200, 195, ..., 15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizeRange {
    pub max: u32,
    pub floor: u32,
    pub step: u32,
}

impl FontSizeRange {
    /// Iterate the candidate sizes, largest first.
    pub fn candidates(&self) -> impl Iterator<Item = u32> + use<> {
        let floor = self.floor;
        let step = self.step.max(1);
        std::iter::successors(Some(self.max), move |size| size.checked_sub(step))
            .take_while(move |size| *size > floor)
    }

    /// The last candidate, used when no size fits.
    pub fn smallest(&self) -> Option<u32> {
        self.candidates().last()
    }
}

/// The two families of documents Cardpress produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Photo + centred white name, two pages (front and back cover).
    IdCard,
    /// Left-aligned black name on a single page.
    Certificate,
}

impl DocumentKind {
    /// Human-readable label used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::IdCard => "ID card",
            Self::Certificate => "certificate",
        }
    }

    /// Font sizes tried, largest first.
    pub fn font_sizes(&self) -> FontSizeRange {
        match self {
            Self::IdCard => ID_FONT_SIZES,
            Self::Certificate => CERTIFICATE_FONT_SIZES,
        }
    }

    /// Whether a profile photo is composited onto the front.
    pub fn has_photo(&self) -> bool {
        matches!(self, Self::IdCard)
    }

    /// Whether a back cover is appended as page 2.
    pub fn has_back_cover(&self) -> bool {
        matches!(self, Self::IdCard)
    }

    /// Name colour as RGBA.
    pub fn text_colour(&self) -> [u8; 4] {
        match self {
            Self::IdCard => [255, 255, 255, 255],
            Self::Certificate => [0, 0, 0, 255],
        }
    }

    /// Widest advance a name may have on a template `template_width` pixels wide.
    pub fn allowed_text_width(&self, template_width: u32) -> f32 {
        match self {
            Self::IdCard => template_width.saturating_sub(ID_TEXT_MARGIN_PX) as f32,
            Self::Certificate => CERTIFICATE_TEXT_WIDTH_RATIO * template_width as f32,
        }
    }

    /// Top-left origin of the name for a template of `width` x `height`.
    ///
    /// ID cards centre the name horizontally and anchor it near the bottom;
    /// certificates place it at a fixed left margin just above the middle.
    pub fn text_origin(&self, width: u32, height: u32, text_width: f32, text_height: i32) -> (i32, i32) {
        match self {
            Self::IdCard => {
                let x = ((width as f32 - text_width) / 2.0).round() as i32;
                let y = height as i32 - ID_TEXT_BOTTOM_PX - text_height;
                (x, y)
            }
            Self::Certificate => {
                let y = (height as f32 / 2.0).round() as i32 - text_height - CERTIFICATE_TEXT_RISE;
                (CERTIFICATE_TEXT_X, y)
            }
        }
    }
}

/// Which static back cover is appended to an ID card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackCover {
    Light,
    Dark,
}

impl BackCover {
    /// Marker looked for in template names when no back cover is given.
    pub const DARK_MARKER: &'static str = "dark";

    /// Classify a template reference by name: templates whose name contains
    /// `dark` (any case) get the dark back cover.
    pub fn infer(template: &str) -> Self {
        if template.to_ascii_lowercase().contains(Self::DARK_MARKER) {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl FromStr for BackCover {
    type Err = CardpressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CardpressError::InvalidArguments(format!(
                "unknown back cover '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

impl std::fmt::Display for BackCover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// A template as the user named it: either a file path or a bare name
/// looked up in the templates directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateRef(pub String);

impl TemplateRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One input unit: a name and optional photo producing one output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub template: TemplateRef,
    pub name: String,
    /// Profile photo; `None` falls back to the placeholder.
    pub photo: Option<PathBuf>,
    /// Explicit output path; `None` derives one from the name.
    pub output: Option<PathBuf>,
    /// Explicit back cover; `None` infers it from the template name.
    pub back_cover: Option<BackCover>,
}

impl SubjectRecord {
    pub fn new(template: TemplateRef, name: impl Into<String>) -> Self {
        Self {
            template,
            name: name.into(),
            photo: None,
            output: None,
            back_cover: None,
        }
    }

    /// Attach a photo. Blank paths count as no photo.
    pub fn with_photo(mut self, photo: Option<PathBuf>) -> Self {
        self.photo = photo.filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_back_cover(mut self, back_cover: Option<BackCover>) -> Self {
        self.back_cover = back_cover;
        self
    }

    /// The back cover to use: the explicit choice, else the template-name
    /// classification.
    pub fn resolved_back_cover(&self) -> BackCover {
        self.back_cover
            .unwrap_or_else(|| BackCover::infer(self.template.as_str()))
    }
}

/// Result of running the pipeline on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecordOutcome {
    Generated {
        name: String,
        output: PathBuf,
        /// SHA-256 of the composited front page pixels.
        content_hash: String,
    },
    Skipped {
        name: String,
        reason: String,
    },
}

impl RecordOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Generated { name, .. } | Self::Skipped { name, .. } => name,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Aggregate of every record processed in one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<RecordOutcome>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_generated()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.generated_count()
    }

    /// `(name, reason)` for every skipped record, in processing order.
    pub fn skip_reasons(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                RecordOutcome::Skipped { name, reason } => Some((name.as_str(), reason.as_str())),
                RecordOutcome::Generated { .. } => None,
            })
            .collect()
    }

    /// Paths of every document written.
    pub fn outputs(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                RecordOutcome::Generated { output, .. } => Some(output),
                RecordOutcome::Skipped { .. } => None,
            })
            .collect()
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} generated, {} skipped",
            self.generated_count(),
            self.skipped_count()
        )?;
        for (name, reason) in self.skip_reasons() {
            write!(f, "\n  skipped {name}: {reason}")?;
        }
        Ok(())
    }
}
