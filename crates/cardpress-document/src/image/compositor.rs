// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo compositor — places a circular profile photo into the photo slot of
// a front template.

use image::RgbaImage;
use image::imageops;
use tracing::{debug, instrument};

use super::processor::ImageProcessor;

/// Square region of a front template that receives the profile photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSlot {
    /// Side of the square, `floor(min(width, height) / 2)`.
    pub side: u32,
    pub x: u32,
    pub y: u32,
}

impl PhotoSlot {
    /// Slot geometry for a `width` x `height` template.
    ///
    /// The photo is centred horizontally and sits above the vertical centre:
    /// with `offset = width - side`, it goes to `(offset / 2, 3 * offset / 4)`.
    pub fn for_template(width: u32, height: u32) -> Self {
        let side = width.min(height) / 2;
        let offset = width - side;
        Self {
            side,
            x: offset / 2,
            y: 3 * offset / 4,
        }
    }
}

/// Resize `photo` into the template's slot, cut it to a circle, and paste it.
///
/// Pixels outside the circle are fully transparent and leave the template
/// untouched.
#[instrument(skip_all, fields(template_w = template.width(), template_h = template.height()))]
pub fn composite_photo(template: &mut RgbaImage, photo: ImageProcessor) -> PhotoSlot {
    let slot = PhotoSlot::for_template(template.width(), template.height());
    if slot.side == 0 {
        return slot;
    }
    let masked = photo
        .resize_exact(slot.side, slot.side)
        .circular_alpha()
        .into_rgba8();

    // Alpha-blended; whatever overruns the template edge is clipped.
    imageops::overlay(template, &masked, i64::from(slot.x), i64::from(slot.y));
    debug!(side = slot.side, x = slot.x, y = slot.y, "Photo composited");
    slot
}
