// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turkish collation and case folding.
//!
//! Text ordering is pinned to the Turkish alphabet regardless of host locale:
//!
//! ```text
//! a b c ç d e f g ğ h ı i j k l m n o ö p (q) r s ş t u ü v (w) (x) y z
//! ```
//!
//! Comparison is multi-level. Letters compare by alphabet position first
//! (case-insensitive, circumflex vowels folded onto their base letter), then
//! plain before circumflex, then lowercase before uppercase. Whitespace and
//! punctuation sort before digits, digits before letters.

use std::cmp::Ordering;

const ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

const WHITESPACE: u32 = 1;
const PUNCTUATION_BASE: u32 = 2;
const DIGIT_BASE: u32 = PUNCTUATION_BASE + char::MAX as u32 + 1;
const LETTER_BASE: u32 = DIGIT_BASE + 10;
const OTHER_LETTER_BASE: u32 = LETTER_BASE + ALPHABET.len() as u32;

/// Collation weights of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    primary: u32,
    secondary: u8,
    tertiary: u8,
}

/// Lowercases one character under Turkish rules (`I` → `ı`, `İ` → `i`).
fn fold_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

/// Lowercases a string under Turkish rules.
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Case key for text matching: Turkish lowercasing, then `ı` merged into `i`.
///
/// `I`, `ı`, `İ` and `i` all land on `i`, so both Turkish and ASCII text
/// match regardless of case.
pub fn match_key(s: &str) -> String {
    s.chars()
        .map(|c| match fold_char(c) {
            'ı' => 'i',
            lower => lower,
        })
        .collect()
}

fn strip_circumflex(c: char) -> (char, u8) {
    match c {
        'â' => ('a', 1),
        'î' => ('i', 1),
        'û' => ('u', 1),
        _ => (c, 0),
    }
}

fn element(c: char) -> Element {
    let lower = fold_char(c);
    let tertiary = u8::from(lower != c);
    let (base, secondary) = strip_circumflex(lower);

    let primary = if let Some(pos) = ALPHABET.iter().position(|&letter| letter == base) {
        LETTER_BASE + pos as u32
    } else if let Some(digit) = base.to_digit(10) {
        DIGIT_BASE + digit
    } else if base.is_whitespace() {
        WHITESPACE
    } else if base.is_alphabetic() {
        OTHER_LETTER_BASE + base as u32
    } else {
        PUNCTUATION_BASE + base as u32
    };

    Element {
        primary,
        secondary,
        tertiary,
    }
}

/// Compares two strings in Turkish alphabetical order.
///
/// Strings equal at every collation level fall back to code point order, so
/// the result is a total order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let ea: Vec<Element> = a.chars().map(element).collect();
    let eb: Vec<Element> = b.chars().map(element).collect();

    let primary = ea.iter().map(|e| e.primary).cmp(eb.iter().map(|e| e.primary));
    primary
        .then_with(|| ea.iter().map(|e| e.secondary).cmp(eb.iter().map(|e| e.secondary)))
        .then_with(|| ea.iter().map(|e| e.tertiary).cmp(eb.iter().map(|e| e.tertiary)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "collate_tests.rs"]
mod tests;
