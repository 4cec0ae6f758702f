// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed vocabularies of the status and priority property types.
//!
//! Both lookup tables are immutable statics; comparators only read them.

use crate::property::SelectOption;

/// Canonical priority level names mapped to their scores, highest first.
pub static PRIORITY_SCORES: [(&str, u8); 5] = [
    ("Çok Yüksek", 5),
    ("Yüksek", 4),
    ("Orta", 3),
    ("Düşük", 2),
    ("Çok Düşük", 1),
];

/// Canonical status group names mapped to their rank.
pub static STATUS_RANK: [(&str, u8); 3] = [("To-do", 1), ("In Progress", 2), ("Complete", 3)];

/// Rank of any group missing from [`STATUS_RANK`].
pub const UNRANKED_GROUP: u8 = 4;

/// Score of a priority option name; 0 for anything non-canonical.
pub fn priority_score(name: &str) -> u8 {
    PRIORITY_SCORES
        .iter()
        .find(|(level, _)| *level == name)
        .map_or(0, |(_, score)| *score)
}

/// Rank of a status group; unknown groups come after the canonical three.
pub fn status_rank(group: &str) -> u8 {
    STATUS_RANK
        .iter()
        .find(|(canonical, _)| *canonical == group)
        .map_or(UNRANKED_GROUP, |(_, rank)| *rank)
}

pub(crate) fn default_status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("todo", "Yapılacak", "gray").with_group("To-do"),
        SelectOption::new("in_progress", "Devam Ediyor", "blue").with_group("In Progress"),
        SelectOption::new("done", "Tamamlandı", "green").with_group("Complete"),
    ]
}

pub(crate) fn default_priority_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("p1", "Çok Düşük", "gray"),
        SelectOption::new("p2", "Düşük", "blue"),
        SelectOption::new("p3", "Orta", "yellow"),
        SelectOption::new("p4", "Yüksek", "orange"),
        SelectOption::new("p5", "Çok Yüksek", "red"),
    ]
}

#[cfg(test)]
#[path = "vocab_tests.rs"]
mod tests;
