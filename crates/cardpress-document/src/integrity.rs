// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content fingerprints — SHA-256 over rendered pixels.

use image::RgbaImage;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of `data` and return it as a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Fingerprint a rendered page: dimensions followed by the raw RGBA samples.
///
/// Two renders of the same record produce the same hash, which is what batch
/// re-runs are checked against.
pub fn hash_page(page: &RgbaImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(page.width().to_be_bytes());
    hasher.update(page.height().to_be_bytes());
    hasher.update(page.as_raw());
    hex::encode(hasher.finalize())
}
