// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cardpress — Core types, errors, and asset configuration shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod naming;
pub mod types;

pub use config::AssetLayout;
pub use error::CardpressError;
pub use types::*;
