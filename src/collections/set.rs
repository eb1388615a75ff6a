//! Hash set with set-algebra operations that build new sets.
//!
//! [`ExtendedSet`] wraps [`std::collections::HashSet`]. The base set's
//! `union`, `intersection` and `difference` return lazy iterators; the
//! versions here return a new [`ExtendedSet`] and accept any iterable of
//! borrowed values as the other operand. Neither operand is modified.
//!
//! # Examples
//!
//! ```rust
//! use extended_collections::collections::ExtendedSet;
//!
//! let left = ExtendedSet::from(["a"]);
//! let right = ExtendedSet::from(["a", "b"]);
//!
//! let union = left.union(&right);
//! assert_eq!(union, ExtendedSet::from(["a", "b"]));
//! assert_eq!(left.len(), 1);
//! ```

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

use log::debug;

use super::DefaultHashBuilder;

/// A `HashSet` whose set operations produce new sets.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `union`        | O(n + m)   |
/// | `intersection` | O(n + m)   |
/// | `difference`   | O(n + m)   |
#[derive(Clone)]
pub struct ExtendedSet<T, S = DefaultHashBuilder> {
    inner: HashSet<T, S>,
}

impl<T> ExtendedSet<T, DefaultHashBuilder> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedSet;
    ///
    /// let set: ExtendedSet<i32> = ExtendedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` values.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> ExtendedSet<T, S> {
    /// Creates an empty set that hashes values with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns `true` if the set contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the wrapped `HashSet`.
    #[inline]
    pub const fn as_inner(&self) -> &HashSet<T, S> {
        &self.inner
    }

    /// Returns the wrapped `HashSet` mutably.
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut HashSet<T, S> {
        &mut self.inner
    }

    /// Unwraps the set into the underlying `HashSet`.
    #[inline]
    pub fn into_inner(self) -> HashSet<T, S> {
        self.inner
    }
}

impl<T, S> ExtendedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set with every value of `self` and of `other`.
    ///
    /// Values are deduplicated by `Hash + Eq`. `other` can be any iterable of
    /// borrowed values: another `ExtendedSet`, a `HashSet`, a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedSet;
    ///
    /// let set = ExtendedSet::from([1, 2]);
    ///
    /// let union = set.union(&[2, 3]);
    /// assert_eq!(union, ExtendedSet::from([1, 2, 3]));
    /// assert_eq!(set, ExtendedSet::from([1, 2]));
    /// ```
    pub fn union<'a, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut result = self.clone();
        result.inner.extend(other.into_iter().cloned());
        debug!(
            "union: {} values into {} values",
            self.inner.len(),
            result.inner.len()
        );
        result
    }

    /// Returns a new set with the values of `self` that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedSet;
    ///
    /// let set = ExtendedSet::from([1, 2, 3]);
    /// assert_eq!(set.intersection(&[2, 3, 4]), ExtendedSet::from([2, 3]));
    /// ```
    pub fn intersection<'a, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut result =
            Self::with_capacity_and_hasher(self.inner.len(), self.inner.hasher().clone());
        result.inner.extend(
            other
                .into_iter()
                .filter(|value| self.inner.contains(*value))
                .cloned(),
        );
        result
    }

    /// Returns a new set with the values of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedSet;
    ///
    /// let set = ExtendedSet::from([1, 2, 3]);
    /// assert_eq!(set.difference(&[2, 3, 4]), ExtendedSet::from([1]));
    /// ```
    pub fn difference<'a, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut result = self.clone();
        for value in other {
            result.inner.remove(value);
        }
        result
    }
}

// =============================================================================
// Delegation to the base set
// =============================================================================

impl<T, S> Deref for ExtendedSet<T, S> {
    type Target = HashSet<T, S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, S> DerefMut for ExtendedSet<T, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for ExtendedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }
}

impl<T, S> From<HashSet<T, S>> for ExtendedSet<T, S> {
    #[inline]
    fn from(inner: HashSet<T, S>) -> Self {
        Self { inner }
    }
}

impl<T, S> From<ExtendedSet<T, S>> for HashSet<T, S> {
    #[inline]
    fn from(set: ExtendedSet<T, S>) -> Self {
        set.inner
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for ExtendedSet<T, DefaultHashBuilder> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> FromIterator<T> for ExtendedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T, S> Extend<T> for ExtendedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for ExtendedSet<T, S> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a ExtendedSet<T, S> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T, S> PartialEq for ExtendedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for ExtendedSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for ExtendedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for ExtendedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in &self.inner {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for ExtendedSet<T, S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.inner.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for ExtendedSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <HashSet<T, S> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let set: ExtendedSet<i32> = ExtendedSet::new();
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_union_with_empty_is_copy() {
        let set = ExtendedSet::from([1, 2, 3]);
        let empty: ExtendedSet<i32> = ExtendedSet::new();
        assert_eq!(set.union(&empty), set);
        assert_eq!(empty.union(&set), set);
    }

    #[rstest]
    fn test_union_accepts_base_hash_set() {
        let set = ExtendedSet::from(["a"]);
        let base: HashSet<&str> = ["b"].into_iter().collect();
        assert_eq!(set.union(&base), ExtendedSet::from(["a", "b"]));
    }

    #[rstest]
    fn test_intersection_and_difference_leave_inputs() {
        let left = ExtendedSet::from([1, 2, 3]);
        let right = ExtendedSet::from([3, 4]);

        assert_eq!(left.intersection(&right), ExtendedSet::from([3]));
        assert_eq!(left.difference(&right), ExtendedSet::from([1, 2]));
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 2);
    }

    #[rstest]
    fn test_display_single_value() {
        let set = ExtendedSet::from([7]);
        assert_eq!(format!("{set}"), "{7}");
    }

    #[rstest]
    fn test_display_empty() {
        let set: ExtendedSet<i32> = ExtendedSet::new();
        assert_eq!(format!("{set}"), "{}");
    }
}
