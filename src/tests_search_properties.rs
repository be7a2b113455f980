//! End-to-end search properties exercised across the public API

use crate::enumeration::Enumeration;
use crate::relation::{case_insensitive, equality};
use crate::search::{find_by, find_by_name, find_by_name_ignore_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

impl Enumeration for Color {
    const ALL: &'static [Self] = &[Color::Red, Color::Green, Color::Blue];

    fn name(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

#[test]
fn every_constant_found_by_upper_and_lower_name() {
    for constant in Color::ALL {
        let upper = constant.name().to_uppercase();
        let lower = constant.name().to_lowercase();
        assert_eq!(find_by_name_ignore_case::<Color>(&upper), Some(constant));
        assert_eq!(find_by_name_ignore_case::<Color>(&lower), Some(constant));
    }
}

#[test]
fn absent_name_returns_none() {
    assert_eq!(find_by_name_ignore_case::<Color>("purple"), None);
    assert_eq!(find_by_name::<Color, _>("purple", &case_insensitive()), None);
    assert_eq!(find_by_name::<Color, _>("purple", &equality()), None);
}

#[test]
fn green_found_case_insensitively() {
    assert_eq!(find_by_name_ignore_case::<Color>("green"), Some(&Color::Green));
}

#[test]
fn ordinal_predicate_selects_blue() {
    assert_eq!(find_by(|c: &Color| c.ordinal() == 2), Some(&Color::Blue));
}

#[test]
fn always_false_predicate_returns_none_on_nonempty_type() {
    assert!(!Color::ALL.is_empty());
    assert_eq!(find_by(|_: &Color| false), None);
}

#[test]
fn default_entry_point_agrees_with_case_insensitive_relation() {
    for needle in ["red", "GREEN", "bLuE", "purple", ""] {
        assert_eq!(
            find_by_name_ignore_case::<Color>(needle),
            find_by_name::<Color, _>(needle, &case_insensitive())
        );
    }
}

#[test]
fn search_is_read_only() {
    // Two scans over the same type observe identical state
    let first = find_by_name_ignore_case::<Color>("blue");
    let second = find_by_name_ignore_case::<Color>("blue");
    assert_eq!(first, second);
    assert_eq!(Color::ALL.len(), 3);
}

#[test]
fn returned_reference_is_a_static_borrow() {
    // The result is a non-owning handle to the constant, usable for 'static
    let found: &'static Color = find_by_name_ignore_case::<Color>("red").unwrap();
    assert_eq!(*found, Color::Red);
    assert_eq!(found.ordinal(), 0);
}
