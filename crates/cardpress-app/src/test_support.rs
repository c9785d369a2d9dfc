// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared fixtures for the binary's tests.

use std::path::PathBuf;

use cardpress_core::AssetLayout;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// Bold sans font bundled with the repository for rendering tests.
const TEST_FONT: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/fonts/DejaVuSans-Bold.ttf"
));

/// Asset root with an 800x1000 `volunteer` template, both back covers, a
/// green placeholder photo at `profiles/unknown.png`, and the name font.
pub fn fixture() -> (TempDir, AssetLayout) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for sub in ["templates", "fonts", "profiles"] {
        std::fs::create_dir_all(root.join(sub)).unwrap();
    }
    RgbaImage::from_pixel(800, 1000, Rgba([20, 40, 90, 255]))
        .save(root.join("templates/volunteer.png"))
        .unwrap();
    for (file, shade) in [("back-light.png", 230u8), ("back-dark.png", 25)] {
        RgbaImage::from_pixel(800, 1000, Rgba([shade, shade, shade, 255]))
            .save(root.join("templates").join(file))
            .unwrap();
    }
    RgbaImage::from_pixel(64, 64, Rgba([0, 200, 0, 255]))
        .save(root.join("profiles/unknown.png"))
        .unwrap();
    std::fs::write(root.join("fonts/Helvetica-Bold.ttf"), TEST_FONT).unwrap();

    let mut layout = AssetLayout::rooted_at(root);
    layout.placeholder_photo = PathBuf::from("profiles/unknown.png");
    (dir, layout)
}

/// Raw streams of the image XObjects drawn on the first page of `pdf`.
pub fn front_page_images(pdf: &std::path::Path) -> Vec<Vec<u8>> {
    fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a lopdf::Object) -> &'a lopdf::Object {
        doc.dereference(obj).unwrap().1
    }

    let doc = lopdf::Document::load(pdf).unwrap();
    let page = doc.get_dictionary(doc.get_pages()[&1]).unwrap();
    let resources = resolve(&doc, page.get(b"Resources").unwrap()).as_dict().unwrap();
    let xobjects = resolve(&doc, resources.get(b"XObject").unwrap()).as_dict().unwrap();
    let mut streams: Vec<Vec<u8>> = xobjects
        .iter()
        .filter_map(|(_, obj)| match resolve(&doc, obj) {
            lopdf::Object::Stream(stream) => Some(stream.content.clone()),
            _ => None,
        })
        .collect();
    streams.sort();
    streams
}
