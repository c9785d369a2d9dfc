// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — load templates and photos, force-resize, and cut photos
// to a circle. Operates on in-memory images using the `image` crate.

use std::path::Path;

use cardpress_core::error::{CardpressError, Result};
use image::{DynamicImage, GrayImage, ImageReader, Luma, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use tracing::{debug, info, instrument};

/// Image pipeline operating on a single in-memory image.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so a
/// photo can be prepared in one chain:
///
/// ```ignore
/// let photo = ImageProcessor::open_photo("profiles/ada.jpg")?
///     .resize_exact(400, 400)
///     .circular_alpha();
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load a template image. Any failure is fatal for the run.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open_template(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = decode(path).map_err(|err| {
            CardpressError::Template(format!("failed to open {}: {}", path.display(), err))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            "Template loaded"
        );
        Ok(Self { image: img })
    }

    /// Load a subject photo.
    ///
    /// A path that does not exist yields `PhotoNotFound`; a file that exists
    /// but cannot be decoded yields `PhotoInvalid`. Both skip the record.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open_photo(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CardpressError::PhotoNotFound {
                path: path.to_path_buf(),
            });
        }
        let img = decode(path).map_err(|err| CardpressError::PhotoInvalid {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Photo loaded"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the image as 8-bit RGBA.
    pub fn into_rgba8(self) -> RgbaImage {
        self.image.into_rgba8()
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Resize the image to exactly `width` x `height`, ignoring aspect ratio.
    #[instrument(skip(self))]
    pub fn resize_exact(self, width: u32, height: u32) -> Self {
        debug!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            "Resizing image"
        );
        let resized =
            self.image
                .resize_exact(width, height, image::imageops::FilterType::Lanczos3);
        Self { image: resized }
    }

    /// Replace the alpha channel with a circle inscribed in the image.
    ///
    /// Intended for square images; a non-square image gets the circle
    /// inscribed in its top-left square and is transparent elsewhere.
    #[instrument(skip(self))]
    pub fn circular_alpha(self) -> Self {
        let mut rgba = self.image.into_rgba8();
        let side = rgba.width().min(rgba.height());
        let mask = circular_mask(side);

        for (x, y, pixel) in rgba.enumerate_pixels_mut() {
            pixel.0[3] = if x < side && y < side {
                mask.get_pixel(x, y).0[0]
            } else {
                0
            };
        }
        Self {
            image: DynamicImage::ImageRgba8(rgba),
        }
    }
}

/// Single-channel `side` x `side` mask: a filled circle inscribed in the
/// square at 255 on a 0 background.
pub fn circular_mask(side: u32) -> GrayImage {
    let mut mask = GrayImage::new(side, side);
    if side == 0 {
        return mask;
    }
    let centre = (side as i32 - 1) / 2;
    let radius = side as i32 / 2;
    draw_filled_circle_mut(&mut mask, (centre, centre), radius, Luma([255u8]));
    mask
}

/// Decode by content rather than by extension.
fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}
