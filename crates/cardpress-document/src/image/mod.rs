// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — template/photo loading, circular masking, and photo compositing.

pub mod compositor;
pub mod processor;

pub use compositor::{PhotoSlot, composite_photo};
pub use processor::ImageProcessor;
