// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Cardpress.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Cardpress operations.
#[derive(Debug, Error)]
pub enum CardpressError {
    // -- Photo boundary (per-record, non-fatal) --
    #[error("the file at {} was not found", .path.display())]
    PhotoNotFound { path: PathBuf },

    #[error("the file at {} is not a valid image: {reason}", .path.display())]
    PhotoInvalid { path: PathBuf, reason: String },

    // -- Rendering --
    #[error("template could not be loaded: {0}")]
    Template(String),

    #[error("font could not be loaded: {0}")]
    Font(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("PDF operation failed: {0}")]
    PdfError(String),

    // -- Input --
    #[error("tabular input error: {0}")]
    Csv(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CardpressError {
    /// Whether this error only affects the record being processed.
    ///
    /// Photo failures skip the record and let the batch continue; everything
    /// else aborts the run.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::PhotoNotFound { .. } | Self::PhotoInvalid { .. }
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CardpressError>;
