// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — turns CLI input into subject records and drives the
// generator over them.

pub mod batch;
pub mod csv_input;
pub mod photo_dir;
