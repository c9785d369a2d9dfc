// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the people running a batch.
//
// Every technical error is mapped to a plain sentence with a suggestion. The
// severity tells the dispatcher whether the run can carry on.

use crate::error::CardpressError;

/// How far an error reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Only the current record is lost; the batch continues.
    Skip,
    /// The whole run stops.
    Fatal,
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary, printed as `Error: <message>`.
    pub message: String,
    /// What the user should try next.
    pub suggestion: String,
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {} {}", self.message, self.suggestion)
    }
}

/// Convert a `CardpressError` into a `HumanError`.
pub fn humanize_error(err: &CardpressError) -> HumanError {
    match err {
        // -- Photo boundary --
        CardpressError::PhotoNotFound { path } => HumanError {
            message: format!("The file at {} was not found.", path.display()),
            suggestion: "Check the photo path; this record was skipped.".into(),
            severity: Severity::Skip,
        },

        CardpressError::PhotoInvalid { path, .. } => HumanError {
            message: format!("The file at {} is not a valid image.", path.display()),
            suggestion: "Re-export the photo as JPEG or PNG; this record was skipped.".into(),
            severity: Severity::Skip,
        },

        // -- Rendering --
        CardpressError::Template(detail) => HumanError {
            message: "The template image couldn't be opened.".into(),
            suggestion: format!("Check the template name against the templates directory. ({detail})"),
            severity: Severity::Fatal,
        },

        CardpressError::Font(detail) => HumanError {
            message: "The name font couldn't be loaded.".into(),
            suggestion: format!("Pass a TrueType font with --font-path or fix the configured font. ({detail})"),
            severity: Severity::Fatal,
        },

        CardpressError::ImageError(detail) => HumanError {
            message: "An image couldn't be processed.".into(),
            suggestion: format!("The file may be damaged or in an unusual format. ({detail})"),
            severity: Severity::Fatal,
        },

        CardpressError::PdfError(detail) => HumanError {
            message: "The PDF couldn't be written.".into(),
            suggestion: format!("Try again with a different output path. ({detail})"),
            severity: Severity::Fatal,
        },

        // -- Input --
        CardpressError::Csv(detail) => HumanError {
            message: "The CSV file couldn't be read.".into(),
            suggestion: format!("It needs a header row with template, name and profile-pic columns. ({detail})"),
            severity: Severity::Fatal,
        },

        CardpressError::InvalidArguments(detail) => HumanError {
            message: "Those arguments don't describe a run.".into(),
            suggestion: detail.clone(),
            severity: Severity::Fatal,
        },

        // -- Storage --
        CardpressError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "A file couldn't be found.".into(),
                    suggestion: format!("It may have been moved or deleted. ({io_err})"),
                    severity: Severity::Fatal,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Cardpress doesn't have permission to use that file.".into(),
                    suggestion: "Check the permissions of the output directory.".into(),
                    severity: Severity::Fatal,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: format!("Check the disk has space and try again. ({io_err})"),
                    severity: Severity::Fatal,
                }
            }
        }

        CardpressError::Serialization(detail) => HumanError {
            message: "The configuration file isn't valid JSON.".into(),
            suggestion: format!("Fix the file passed with --config. ({detail})"),
            severity: Severity::Fatal,
        },
    }
}
