// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cardpress-document — Rendering for Cardpress.
//
// Provides photo compositing (resize, circular mask, paste), largest-fit name
// rendering, PDF export, and the per-record generator tying them together.

pub mod generator;
pub mod image;
pub mod integrity;
pub mod pdf;
pub mod text;

// Re-export the primary structs so callers can use `cardpress_document::CardGenerator` etc.
pub use crate::generator::CardGenerator;
pub use crate::image::processor::ImageProcessor;
pub use crate::pdf::writer::PdfWriter;
pub use crate::text::font::FontFace;
