// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Font face — loads a TrueType font and measures strings at a given size.
//
// Sizes are em sizes: at size 100 one em spans 100 px, the same convention
// as point sizes in desktop imaging tools.

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use cardpress_core::error::{CardpressError, Result};
use tracing::{debug, instrument};

/// A loaded font used to measure and draw names.
pub struct FontFace {
    font: FontVec,
}

impl FontFace {
    /// Load a font file from disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|err| {
            CardpressError::Font(format!("failed to read {}: {}", path.display(), err))
        })?;
        let face = Self::from_bytes(data).map_err(|err| match err {
            CardpressError::Font(detail) => {
                CardpressError::Font(format!("{}: {}", path.display(), detail))
            }
            other => other,
        })?;
        debug!("Font loaded");
        Ok(face)
    }

    /// Parse a font already in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(data)
            .map_err(|err| CardpressError::Font(format!("invalid font data: {}", err)))?;
        Ok(Self { font })
    }

    /// Borrow the underlying `ab_glyph` font.
    pub fn font(&self) -> &FontVec {
        &self.font
    }

    /// Pixel scale for an em size.
    pub fn px_scale(&self, size: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / units_per_em)
    }

    /// Horizontal advance of `text` at `size`, kerning included.
    pub fn advance_width(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(self.px_scale(size));
        let mut width = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Height of `text` at `size` measured from the ascender line: the gap
    /// above the tallest glyph plus the ink extent down to the lowest point.
    ///
    /// Returns 0 for strings with no visible glyphs.
    pub fn text_height(&self, text: &str, size: f32) -> i32 {
        let scale = self.px_scale(size);
        let scaled = self.font.as_scaled(scale);
        let baseline = scaled.ascent();

        let mut caret = 0.0;
        let mut bounds: Option<(f32, f32)> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let rect = outlined.px_bounds();
                bounds = Some(match bounds {
                    Some((top, bottom)) => (top.min(rect.min.y), bottom.max(rect.max.y)),
                    None => (rect.min.y, rect.max.y),
                });
            }
        }

        match bounds {
            Some((top, bottom)) => top.floor() as i32 + bottom.ceil() as i32,
            None => 0,
        }
    }
}
