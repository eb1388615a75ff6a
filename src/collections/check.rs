//! The optional expected-value parameter of conditional operations.

use super::SameValue;

/// Guards [`delete`](super::ExtendedMap::delete) and
/// [`replace`](super::ExtendedMap::replace) with an expected current value.
///
/// `Any` means no expected value was supplied. `SameAs` carries one, which
/// may itself be an absent value such as `&None`: the two cases never
/// collide.
///
/// # Examples
///
/// ```rust
/// use extended_collections::collections::ValueCheck;
///
/// assert!(ValueCheck::Any.admits(&25_i32));
/// assert!(ValueCheck::SameAs(&25_i32).admits(&25));
/// assert!(!ValueCheck::SameAs(&10_i32).admits(&25));
///
/// // An expected `None` is a real expectation, not a missing argument.
/// assert!(!ValueCheck::SameAs(&None).admits(&Some(1_i32)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCheck<'a, V: ?Sized> {
    /// No expected value; the operation is unconditional.
    Any,
    /// The current value must be the same value as this one.
    SameAs(&'a V),
}

impl<V: ?Sized> Default for ValueCheck<'_, V> {
    #[inline]
    fn default() -> Self {
        Self::Any
    }
}

impl<V: SameValue + ?Sized> ValueCheck<'_, V> {
    /// Returns `true` if `current` satisfies this check.
    #[inline]
    pub fn admits(&self, current: &V) -> bool {
        match self {
            Self::Any => true,
            Self::SameAs(expected) => current.same_value(*expected),
        }
    }
}

impl<'a, V: ?Sized> From<&'a V> for ValueCheck<'a, V> {
    #[inline]
    fn from(expected: &'a V) -> Self {
        Self::SameAs(expected)
    }
}

impl<'a, V: ?Sized> From<Option<&'a V>> for ValueCheck<'a, V> {
    /// `None` is "no expected value", not an expected `None`.
    #[inline]
    fn from(expected: Option<&'a V>) -> Self {
        expected.map_or(Self::Any, Self::SameAs)
    }
}
