// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by commands that read
//! view state from the command line.

use clap::Args;
use std::path::PathBuf;

/// Filter rules and sort keys given on the command line.
#[derive(Args, Clone, Debug, Default)]
pub struct ViewArgs {
    /// Filter rule as property:operator[:value] (repeat for AND)
    #[arg(long = "filter", short = 'f', value_name = "RULE")]
    pub filters: Vec<String>,

    /// Sort key as property[:asc|desc] (repeat for tie-breakers)
    #[arg(long = "sort", short = 's', value_name = "KEY")]
    pub sorts: Vec<String>,

    /// JSON file with a view ({"filters": [...], "sorts": [...]})
    #[arg(long, value_name = "FILE")]
    pub view: Option<PathBuf>,
}

/// Limit arguments for listed results.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Ignore the configured limit
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,
}
