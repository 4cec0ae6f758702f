// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! Input files (snapshots and views) derive their schemas from the runtime
//! types directly. Output structures live here so that their shape is
//! declared in one place for both printing and `vw schema`.

pub mod list;
