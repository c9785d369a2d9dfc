// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text module — font loading, measurement, and largest-fit name rendering.

pub mod fit;
pub mod font;

pub use fit::{FittedText, PlacedText, draw_name, fit_font_size};
pub use font::FontFace;
