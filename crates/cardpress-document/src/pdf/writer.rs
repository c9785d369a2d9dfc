// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — wrap rendered raster pages into a PDF using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use cardpress_core::error::{CardpressError, Result};
use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument};

/// Resolution at which one image pixel maps to one PDF point.
pub const POINT_DPI: f32 = 72.0;

/// Creates PDF documents in which every page is one raster image.
///
/// Each page is sized to its image at [`POINT_DPI`], so a 800x1000 px image
/// becomes an 800x1000 pt page filled edge to edge.
pub struct PdfWriter {
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self { title: None }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Create a PDF with one page per image, in order.
    #[instrument(skip_all, fields(pages = pages.len()))]
    pub fn create_from_pages(&self, pages: &[RgbaImage]) -> Result<Vec<u8>> {
        if pages.is_empty() {
            return Err(CardpressError::PdfError("no pages to write".into()));
        }
        let title = self.title.as_deref().unwrap_or("Cardpress Document");
        info!(title, "Creating image PDF");

        let mut doc = PdfDocument::new(title);
        let mut pdf_pages = Vec::with_capacity(pages.len());

        for page in pages {
            let (width, height) = page.dimensions();
            let rgb: RgbImage = page.convert();
            let raw = RawImage {
                pixels: RawImageData::U8(rgb.into_raw()),
                width: width as usize,
                height: height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let xobject_id = doc.add_image(&raw);

            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(0.0)),
                    scale_x: Some(1.0),
                    scale_y: Some(1.0),
                    dpi: Some(POINT_DPI),
                    rotate: None,
                },
            }];

            pdf_pages.push(PdfPage::new(px_to_mm(width), px_to_mm(height), ops));
            debug!(width, height, "Page added");
        }

        doc.with_pages(pdf_pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!(bytes = output.len(), warnings = warnings.len(), "PDF serialised");

        Ok(output)
    }

    /// Create a PDF from `pages` and write it to `path`.
    pub fn write_pages_to_file(&self, pages: &[RgbaImage], path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_pages(pages)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote PDF to {}", path.as_ref().display());
        Ok(())
    }
}

/// Page edge length for `px` pixels at [`POINT_DPI`].
fn px_to_mm(px: u32) -> Mm {
    Mm(px as f32 * 25.4 / POINT_DPI)
}
