// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vw-core: Filter and sort evaluation for page views
//!
//! This crate decides whether a record matches a filter rule and how records
//! order under sort keys, with semantics that depend on each property's type
//! and option vocabulary. It holds no state between calls and performs no I/O.

pub mod collate;
pub mod error;
pub mod filter;
pub mod operator;
pub mod preset;
pub mod property;
pub mod record;
pub mod sort;
pub mod view;
pub mod vocab;

pub use error::{Error, Result};
pub use filter::{passes, passes_all, FilterRule};
pub use operator::{find_operator, operators_for, validate_rule, Operator, OperatorSpec};
pub use preset::{matches_preset, parse_instant, DatePreset};
pub use property::{
    is_empty, Property, PropertyConfig, PropertyType, PropertyValue, SelectOption,
};
pub use record::{Record, Schema};
pub use sort::{
    comparator_for, with_null_handling, Comparator, NullsFirst, SortDirection, SortKey, SortPlan,
};
pub use view::View;
pub use vocab::{priority_score, status_rank};
