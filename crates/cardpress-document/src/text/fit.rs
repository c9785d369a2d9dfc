// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Largest-fit name rendering.
//
// Candidate sizes are scanned from largest to smallest and the first one
// whose advance fits the allowed band wins. The list is short and the sizes
// must land on exact multiples of the step, so a linear scan is used rather
// than a bisection.

use cardpress_core::types::{DocumentKind, FontSizeRange};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::{debug, instrument, warn};

use super::font::FontFace;

/// A size chosen for a string, with its measurements at that size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    pub size: u32,
    /// Advance width at `size`.
    pub width: f32,
    /// Height from the ascender line at `size`.
    pub height: i32,
    /// Whether `width` is within the allowed band.
    pub fits: bool,
}

/// Where and how large a name was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedText {
    pub fitted: FittedText,
    pub x: i32,
    pub y: i32,
}

/// Pick the largest candidate size at which `text` is no wider than
/// `allowed_width`.
///
/// When no candidate fits, the smallest candidate is returned with
/// `fits == false`. Returns `None` only for an empty range.
pub fn fit_font_size(
    face: &FontFace,
    text: &str,
    allowed_width: f32,
    range: FontSizeRange,
) -> Option<FittedText> {
    let mut chosen = None;
    for size in range.candidates() {
        let width = face.advance_width(text, size as f32);
        let fits = width <= allowed_width;
        chosen = Some((size, width, fits));
        if fits {
            break;
        }
    }

    chosen.map(|(size, width, fits)| FittedText {
        size,
        width,
        height: face.text_height(text, size as f32),
        fits,
    })
}

/// Draw `name` onto `template` using the layout rules of `kind`.
///
/// Nothing is wrapped: a name too long for the smallest size is drawn at that
/// size anyway and may run past the edges.
#[instrument(skip(template, face, kind), fields(kind = kind.label()))]
pub fn draw_name(
    template: &mut RgbaImage,
    face: &FontFace,
    name: &str,
    kind: DocumentKind,
) -> Option<PlacedText> {
    let (width, height) = template.dimensions();
    let allowed = kind.allowed_text_width(width);
    let fitted = fit_font_size(face, name, allowed, kind.font_sizes())?;
    if !fitted.fits {
        warn!(
            size = fitted.size,
            width = fitted.width,
            allowed,
            "Name wider than the text band at the smallest size"
        );
    }

    let (x, y) = kind.text_origin(width, height, fitted.width, fitted.height);
    draw_text_mut(
        template,
        Rgba(kind.text_colour()),
        x,
        y,
        face.px_scale(fitted.size as f32),
        face.font(),
        name,
    );
    debug!(size = fitted.size, x, y, "Name drawn");

    Some(PlacedText { fitted, x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::font_face;
    use cardpress_core::types::{CERTIFICATE_FONT_SIZES, ID_FONT_SIZES};

    #[test]
    fn short_name_gets_the_largest_size() {
        let face = font_face();
        let at_max = face.advance_width("Al", 200.0);
        let fitted = fit_font_size(&face, "Al", at_max + 1.0, ID_FONT_SIZES).unwrap();
        assert_eq!(fitted.size, 200);
        assert!(fitted.fits);
    }

    #[test]
    fn chosen_size_is_the_largest_that_fits() {
        let face = font_face();
        let name = "Alice Smith";
        let allowed = 600.0;
        let fitted = fit_font_size(&face, name, allowed, ID_FONT_SIZES).unwrap();

        assert!(fitted.fits);
        assert!(fitted.width <= allowed);
        assert!(fitted.size < 200);
        let next_up = (fitted.size + 5) as f32;
        assert!(face.advance_width(name, next_up) > allowed);
    }

    #[test]
    fn overlong_name_falls_back_to_the_smallest_size() {
        let face = font_face();
        let name = "W".repeat(200);
        let fitted = fit_font_size(&face, &name, 720.0, ID_FONT_SIZES).unwrap();
        assert_eq!(fitted.size, 15);
        assert!(!fitted.fits);
    }

    #[test]
    fn empty_range_fits_nothing() {
        let face = font_face();
        let empty = FontSizeRange { max: 10, floor: 10, step: 5 };
        assert!(fit_font_size(&face, "Ada", 100.0, empty).is_none());
    }

    #[test]
    fn id_name_is_white_and_centred() {
        let face = font_face();
        let mut template = RgbaImage::from_pixel(800, 1000, Rgba([0, 0, 0, 255]));
        let placed = draw_name(&mut template, &face, "Alice Smith", DocumentKind::IdCard).unwrap();

        assert!(placed.fitted.width <= 720.0);
        let expected_x = ((800.0 - placed.fitted.width) / 2.0).round() as i32;
        assert_eq!(placed.x, expected_x);
        assert_eq!(placed.y, 1000 - 100 - placed.fitted.height);
        assert!(
            template.pixels().any(|p| p.0[0] > 200 && p.0[1] > 200 && p.0[2] > 200),
            "expected white ink on the black template"
        );
    }

    #[test]
    fn certificate_name_is_black_and_left_aligned() {
        let face = font_face();
        let mut template = RgbaImage::from_pixel(1200, 800, Rgba([255, 255, 255, 255]));
        let placed =
            draw_name(&mut template, &face, "Alice Smith", DocumentKind::Certificate).unwrap();

        assert_eq!(placed.x, 100);
        assert!(placed.fitted.size <= CERTIFICATE_FONT_SIZES.max);
        assert!(placed.fitted.width <= 840.0);
        assert_eq!(placed.y, 400 - placed.fitted.height - 5);
        // No ink left of the margin.
        for y in 0..800 {
            for x in 0..95 {
                assert_eq!(template.get_pixel(x, y).0, [255, 255, 255, 255]);
            }
        }
        assert!(template.pixels().any(|p| p.0[0] < 50));
    }
}
