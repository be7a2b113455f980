//! Lookup over an enumeration's constant set
//!
//! Three entry points share a single linear scan in declaration order; they
//! differ only in the predicate that decides a match. The first constant
//! that matches wins, so a tie between several candidates is resolved by
//! position, never by how well either one matched.

use crate::enumeration::Enumeration;
use crate::relation::{CaseInsensitive, EquivalenceRelation};

/// Find the first constant of `T` whose declared name matches `name`,
/// ignoring case.
///
/// Case folding is Unicode-aware (NFKC, then lowercase). Returns the
/// earliest-declared constant when several names collide, or `None` when no
/// name matches. Equivalent to [`find_by_name`] with the
/// [`CaseInsensitive`] relation.
pub fn find_by_name_ignore_case<T: Enumeration>(name: &str) -> Option<&'static T> {
    find_by_name(name, &CaseInsensitive)
}

/// Find the first constant of `T` whose declared name is equivalent to
/// `name` under `relation`.
///
/// The relation sees the constant's declared name on the left and `name` on
/// the right; both sides are always present. Any string equivalence works
/// here: locale-aware, normalization-aware, fuzzy.
pub fn find_by_name<T, R>(name: &str, relation: &R) -> Option<&'static T>
where
    T: Enumeration,
    R: EquivalenceRelation<str> + ?Sized,
{
    find_by(|constant: &T| relation.compare(Some(constant.name()), Some(name)))
}

/// Find the first constant of `T` satisfying `condition`.
///
/// The predicate sees the whole constant, not just its name, so any derived
/// property can drive the match.
pub fn find_by<T, P>(mut condition: P) -> Option<&'static T>
where
    T: Enumeration,
    P: FnMut(&T) -> bool,
{
    T::ALL.iter().find(|constant| condition(constant))
}
