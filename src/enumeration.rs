//! Explicit registration of a type's fixed constant set
//!
//! There is no runtime reflection to enumerate a type's variants, so types
//! opt in by listing their constants once, in declaration order.

/// A fixed, ordered, immutable set of named constants.
///
/// Implementations list every constant in [`ALL`](Enumeration::ALL) in
/// declaration order and report the declared name and position of each one.
/// The constants are process-wide singletons; searches hand out `&'static`
/// borrows of them, never copies.
///
/// The crate trusts the listing: a variant missing from `ALL` is invisible
/// to every search, and an `ordinal` that disagrees with the position in
/// `ALL` is an implementor error. This is the same class of obligation as
/// the relation laws, documented rather than checked.
pub trait Enumeration: Sized + 'static {
    /// Every constant of the type, in declaration order.
    const ALL: &'static [Self];

    /// The declared name of this constant.
    fn name(&self) -> &'static str;

    /// Position of this constant in [`ALL`](Enumeration::ALL).
    fn ordinal(&self) -> usize;
}
