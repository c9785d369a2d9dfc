// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Name <-> file name conversions.

use std::path::Path;

/// Extension of every generated document.
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Characters treated as apostrophes when title-casing.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Output file name derived from a display name: lowercase, spaces replaced
/// with underscores, `.pdf` appended.
pub fn derive_file_name(name: &str) -> String {
    format!("{}.{OUTPUT_EXTENSION}", name.to_lowercase().replace(' ', "_"))
}

/// Display name derived from a photo file name.
///
/// The extension is dropped, underscores become spaces, and every word is
/// capitalised, including each part after an apostrophe:
/// `john_o'brien.png` becomes `John O'Brien`.
pub fn title_case_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    stem.replace('_', " ")
        .split_whitespace()
        .map(capitalise_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalise a word and each apostrophe-separated part of it.
fn capitalise_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_part_start = true;
    for c in word.chars() {
        if APOSTROPHES.contains(&c) {
            out.push(c);
            at_part_start = true;
        } else if at_part_start {
            out.extend(c.to_uppercase());
            at_part_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
