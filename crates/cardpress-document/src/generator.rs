// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Card generator — runs the full pipeline for one subject record:
// load template → composite photo → draw name → export PDF.
//
// Every call re-reads the template, font, photo, and back cover from disk.
// Nothing is cached between records.

use std::path::{Path, PathBuf};

use cardpress_core::AssetLayout;
use cardpress_core::error::{CardpressError, Result};
use cardpress_core::naming::derive_file_name;
use cardpress_core::types::{DocumentKind, RecordOutcome, SubjectRecord};
use image::RgbaImage;
use tracing::{debug, info, instrument, warn};

use crate::image::{ImageProcessor, composite_photo};
use crate::integrity::hash_page;
use crate::pdf::PdfWriter;
use crate::text::{FontFace, draw_name};

/// Produces one document per subject record for a given document kind.
pub struct CardGenerator {
    layout: AssetLayout,
    kind: DocumentKind,
}

impl CardGenerator {
    pub fn new(layout: AssetLayout, kind: DocumentKind) -> Self {
        Self { layout, kind }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Where the document for `record` is written.
    ///
    /// An explicit output path wins; otherwise the name-derived file name is
    /// placed in `output_dir`, or the working directory when there is none.
    pub fn output_path(&self, record: &SubjectRecord, output_dir: Option<&Path>) -> PathBuf {
        if let Some(explicit) = &record.output {
            return explicit.clone();
        }
        let file_name = derive_file_name(&record.name);
        match output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Render the front page of `record` without writing anything.
    ///
    /// Photo failures come back as skippable errors; see
    /// [`CardpressError::is_skippable`].
    #[instrument(skip(self, record), fields(name = %record.name, template = %record.template))]
    pub fn render_front(&self, record: &SubjectRecord) -> Result<RgbaImage> {
        let template_path = self.layout.template_path(&record.template);
        let mut front = ImageProcessor::open_template(&template_path)?.into_rgba8();

        if self.kind.has_photo() {
            let photo_path = record
                .photo
                .clone()
                .unwrap_or_else(|| self.layout.placeholder_photo());
            let photo = ImageProcessor::open_photo(&photo_path)?;
            composite_photo(&mut front, photo);
        } else if record.photo.is_some() {
            debug!("Photo ignored for {}", self.kind.label());
        }

        let face = FontFace::open(self.layout.font_path())?;
        draw_name(&mut front, &face, &record.name, self.kind);
        Ok(front)
    }

    /// Render every page of the document for `record`.
    pub fn render_pages(&self, record: &SubjectRecord) -> Result<Vec<RgbaImage>> {
        let front = self.render_front(record)?;
        if !self.kind.has_back_cover() {
            return Ok(vec![front]);
        }

        let back_cover = record.resolved_back_cover();
        let back_path = self.layout.back_cover_path(back_cover);
        debug!(%back_cover, path = %back_path.display(), "Appending back cover");
        let back = ImageProcessor::open_template(&back_path)?.into_rgba8();
        Ok(vec![front, back])
    }

    /// Run the pipeline for `record` and write its document.
    ///
    /// Returns `Skipped` when the photo cannot be loaded. Every other failure
    /// is returned as an error and should end the run.
    #[instrument(skip(self, record, output_dir), fields(name = %record.name))]
    pub fn generate(&self, record: &SubjectRecord, output_dir: Option<&Path>) -> Result<RecordOutcome> {
        let pages = match self.render_pages(record) {
            Ok(pages) => pages,
            Err(err) if err.is_skippable() => {
                warn!(error = %err, "Skipping record");
                return Ok(RecordOutcome::Skipped {
                    name: record.name.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        };

        let content_hash = hash_page(&pages[0]);
        let output = self.output_path(record, output_dir);

        let mut writer = PdfWriter::new();
        writer.set_title(format!("{}: {}", self.kind.label(), record.name));
        writer
            .write_pages_to_file(&pages, &output)
            .map_err(|err| match err {
                CardpressError::Io(io_err) => CardpressError::Io(std::io::Error::new(
                    io_err.kind(),
                    format!("{}: {}", output.display(), io_err),
                )),
                other => other,
            })?;

        info!(output = %output.display(), pages = pages.len(), "Document generated");
        Ok(RecordOutcome::Generated {
            name: record.name.clone(),
            output,
            content_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TEST_FONT, media_box, page_image_streams};
    use cardpress_core::types::{BackCover, TemplateRef};
    use image::Rgba;
    use tempfile::TempDir;

    const TEMPLATE_BG: Rgba<u8> = Rgba([20, 40, 90, 255]);
    const PLACEHOLDER: Rgba<u8> = Rgba([0, 200, 0, 255]);

    /// Lay out templates/, fonts/ and profiles/ under a temp root.
    fn fixture() -> (TempDir, AssetLayout) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for sub in ["templates", "fonts", "profiles"] {
            std::fs::create_dir_all(root.join(sub)).unwrap();
        }
        RgbaImage::from_pixel(800, 1000, TEMPLATE_BG)
            .save(root.join("templates/volunteer.png"))
            .unwrap();
        RgbaImage::from_pixel(800, 1000, Rgba([250, 250, 250, 255]))
            .save(root.join("templates/certificate.png"))
            .unwrap();
        RgbaImage::from_pixel(800, 1000, Rgba([1, 1, 1, 255]))
            .save(root.join("templates/back-light.png"))
            .unwrap();
        RgbaImage::from_pixel(800, 1000, Rgba([2, 2, 2, 255]))
            .save(root.join("templates/back-dark.png"))
            .unwrap();
        RgbaImage::from_pixel(64, 64, PLACEHOLDER)
            .save(root.join("profiles/unknown.png"))
            .unwrap();
        std::fs::write(root.join("fonts/Helvetica-Bold.ttf"), TEST_FONT).unwrap();

        let mut layout = AssetLayout::rooted_at(root);
        layout.placeholder_photo = PathBuf::from("profiles/unknown.png");
        (dir, layout)
    }

    fn record(name: &str) -> SubjectRecord {
        SubjectRecord::new(TemplateRef::new("volunteer"), name)
    }

    #[test]
    fn alice_without_photo_uses_placeholder_in_the_slot() {
        let (_dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);
        let front = generator.render_front(&record("Alice Smith")).unwrap();

        assert_eq!(front.dimensions(), (800, 1000));
        // Slot is 400x400 at (200, 300); its centre shows the placeholder.
        let centre = front.get_pixel(400, 500);
        assert!(centre.0[1] > 190 && centre.0[0] < 10, "centre {centre:?}");
        // Just outside the slot and the slot's own corner keep the template.
        assert_eq!(*front.get_pixel(199, 500), TEMPLATE_BG);
        assert_eq!(*front.get_pixel(400, 299), TEMPLATE_BG);
        assert_eq!(*front.get_pixel(201, 301), TEMPLATE_BG);
    }

    #[test]
    fn alice_document_has_front_and_back() {
        let (dir, layout) = fixture();
        let out_dir = dir.path().join("ids");
        std::fs::create_dir_all(&out_dir).unwrap();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);

        let outcome = generator.generate(&record("Alice Smith"), Some(&out_dir)).unwrap();
        let output = match outcome {
            RecordOutcome::Generated { output, .. } => output,
            other => panic!("expected a generated document, got {other:?}"),
        };
        assert_eq!(output, out_dir.join("alice_smith.pdf"));

        let doc = lopdf::Document::load(&output).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);
        let (w, h) = media_box(&doc, pages[&1]);
        assert!((w - 800.0).abs() < 0.5 && (h - 1000.0).abs() < 0.5);
    }

    #[test]
    fn certificate_is_a_single_page_without_photo() {
        let (dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::Certificate);
        let cert = SubjectRecord::new(TemplateRef::new("certificate"), "Grace Hopper")
            .with_output(Some(dir.path().join("grace.pdf")));

        let front = generator.render_front(&cert).unwrap();
        assert_eq!(*front.get_pixel(400, 500), Rgba([250, 250, 250, 255]));

        let outcome = generator.generate(&cert, None).unwrap();
        assert!(outcome.is_generated());
        let doc = lopdf::Document::load(dir.path().join("grace.pdf")).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn missing_photo_skips_without_output() {
        let (dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);
        let rec = record("Bob Jones").with_photo(Some(dir.path().join("profiles/bob.jpg")));

        let outcome = generator.generate(&rec, Some(dir.path())).unwrap();
        assert!(matches!(outcome, RecordOutcome::Skipped { ref reason, .. } if reason.contains("not found")));
        assert!(!dir.path().join("bob_jones.pdf").exists());
    }

    #[test]
    fn corrupt_photo_skips_without_output() {
        let (dir, layout) = fixture();
        let bad = dir.path().join("profiles/carol.jpg");
        std::fs::write(&bad, "name,template\n").unwrap();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);

        let outcome = generator
            .generate(&record("Carol").with_photo(Some(bad)), Some(dir.path()))
            .unwrap();
        assert!(matches!(outcome, RecordOutcome::Skipped { ref reason, .. } if reason.contains("not a valid image")));
        assert!(!dir.path().join("carol.pdf").exists());
    }

    #[test]
    fn missing_template_is_fatal() {
        let (dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);
        let rec = SubjectRecord::new(TemplateRef::new("nonexistent"), "Dan");
        let err = generator.generate(&rec, Some(dir.path())).unwrap_err();
        assert!(matches!(err, CardpressError::Template(_)));
    }

    #[test]
    fn missing_font_is_fatal() {
        let (dir, mut layout) = fixture();
        layout.font_path = PathBuf::from("fonts/Missing.ttf");
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);
        let err = generator.generate(&record("Eve"), Some(dir.path())).unwrap_err();
        assert!(matches!(err, CardpressError::Font(_)));
    }

    #[test]
    fn back_cover_follows_classification() {
        let (_dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);

        let dark = generator
            .render_pages(&record("Fay").with_back_cover(Some(BackCover::Dark)))
            .unwrap();
        assert_eq!(dark.len(), 2);
        assert_eq!(*dark[1].get_pixel(0, 0), Rgba([2, 2, 2, 255]));

        let light = generator.render_pages(&record("Fay")).unwrap();
        assert_eq!(*light[1].get_pixel(0, 0), Rgba([1, 1, 1, 255]));
    }

    #[test]
    fn rendering_twice_is_pixel_identical() {
        let (dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);
        let rec = record("Alice Smith");

        let first = generator.generate(&rec, Some(dir.path())).unwrap();
        let first_page = {
            let doc = lopdf::Document::load(dir.path().join("alice_smith.pdf")).unwrap();
            page_image_streams(&doc, 1)
        };
        let second = generator.generate(&rec, Some(dir.path())).unwrap();
        let second_page = {
            let doc = lopdf::Document::load(dir.path().join("alice_smith.pdf")).unwrap();
            page_image_streams(&doc, 1)
        };

        match (first, second) {
            (
                RecordOutcome::Generated { content_hash: a, .. },
                RecordOutcome::Generated { content_hash: b, .. },
            ) => assert_eq!(a, b),
            other => panic!("expected two generated documents, got {other:?}"),
        }
        assert!(!first_page.is_empty(), "front page embeds no image");
        assert_eq!(first_page, second_page);
    }

    #[test]
    fn explicit_output_path_wins() {
        let (_dir, layout) = fixture();
        let generator = CardGenerator::new(layout, DocumentKind::IdCard);
        let rec = record("Alice Smith").with_output(Some(PathBuf::from("/tmp/custom.pdf")));
        assert_eq!(
            generator.output_path(&rec, Some(Path::new("ids"))),
            PathBuf::from("/tmp/custom.pdf")
        );
        assert_eq!(
            generator.output_path(&record("Alice Smith"), None),
            PathBuf::from("alice_smith.pdf")
        );
    }
}
