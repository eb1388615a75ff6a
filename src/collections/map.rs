//! Hash map with compute-style update operations.
//!
//! This module provides [`ExtendedMap`], a thin wrapper around
//! [`std::collections::HashMap`] that adds single-call read-transform-write
//! operations.
//!
//! # Overview
//!
//! Every compute-family operation follows one convention: the transformation
//! returns `Option<V>`, and `None` means "no entry". Returning `None` removes
//! the entry (or never inserts it); returning `Some(value)` stores `value`.
//!
//! | Operation              | Calls the transformation when      | Presence test          |
//! |------------------------|------------------------------------|------------------------|
//! | [`compute`]            | always                             | present value          |
//! | [`compute_if_absent`]  | the key has no entry               | native `contains_key`  |
//! | [`compute_if_present`] | the key has an entry               | native `contains_key`  |
//! | [`compute_if`]         | always, one of two branches        | native `contains_key`  |
//! | [`merge`]              | the key has a present value        | present value          |
//!
//! The *present value* of a key is its stored value unless that value
//! [`is_absent`](SameValue::is_absent). For maps whose value type is an
//! `Option<T>`, an entry holding `None` (only storable through the wrapped
//! `HashMap`) therefore reads as a missing entry in [`compute`], [`merge`]
//! and [`set_all`], while the operations that use the native presence test
//! still see it.
//!
//! Everything the base `HashMap` already does (`get`, `insert`, `remove`,
//! `len`, iteration) is reachable through `Deref` / `DerefMut`.
//!
//! # Examples
//!
//! ```rust
//! use extended_collections::collections::ExtendedMap;
//!
//! let mut word_counts: ExtendedMap<&str, usize> = ExtendedMap::new();
//! for word in ["apple", "pear", "apple"] {
//!     word_counts.merge(word, 1, |count, one| Some(count + one));
//! }
//!
//! assert_eq!(word_counts.get("apple"), Some(&2));
//! assert_eq!(word_counts.get("pear"), Some(&1));
//!
//! // Returning `None` removes the entry.
//! word_counts.compute("pear", |_, _| None);
//! assert!(!word_counts.contains_key("pear"));
//! ```
//!
//! [`compute`]: ExtendedMap::compute
//! [`compute_if_absent`]: ExtendedMap::compute_if_absent
//! [`compute_if_present`]: ExtendedMap::compute_if_present
//! [`compute_if`]: ExtendedMap::compute_if
//! [`merge`]: ExtendedMap::merge
//! [`set_all`]: ExtendedMap::set_all

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{self, Entry, OccupiedEntry};
use std::convert::Infallible;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

use log::{debug, trace};

use super::{DefaultHashBuilder, SameValue, ValueCheck};

// =============================================================================
// Helpers
// =============================================================================

/// Reads a stored value as a present value.
#[inline]
fn present<V: SameValue>(value: &V) -> Option<&V> {
    (!value.is_absent()).then_some(value)
}

/// Stores `outcome` in an occupied entry, or removes the entry on `None`.
fn store_or_remove<'a, K, V>(
    mut entry: OccupiedEntry<'a, K, V>,
    outcome: Option<V>,
) -> Option<&'a V> {
    if let Some(value) = outcome {
        entry.insert(value);
        Some(&*entry.into_mut())
    } else {
        trace!("transformation returned no value, removing entry");
        entry.remove();
        None
    }
}

// =============================================================================
// ExtendedMap Definition
// =============================================================================

/// A `HashMap` with compute-style update operations.
///
/// # Time Complexity
///
/// | Operation                      | Complexity |
/// |--------------------------------|------------|
/// | compute family, `set_if_absent`| O(1)*      |
/// | `delete`, `replace`, `get_or`  | O(1)*      |
/// | `has_value`                    | O(n)       |
/// | `replace_all`                  | O(n)       |
/// | `set_all`                      | O(n + m)   |
///
/// \* plus the cost of the caller's transformation, amortized like `HashMap`.
///
/// `has_value` is a linear scan; there is no value index.
///
/// # Examples
///
/// ```rust
/// use extended_collections::collections::ExtendedMap;
///
/// let mut map = ExtendedMap::from([("Key", 1)]);
///
/// assert_eq!(map.compute_if_present("Key", |_, value| Some(value + 1)), Some(&2));
/// assert_eq!(map.compute_if_present("Other", |_, value| Some(value + 1)), None);
/// ```
#[derive(Clone)]
pub struct ExtendedMap<K, V, S = DefaultHashBuilder> {
    inner: HashMap<K, V, S>,
}

impl<K, V> ExtendedMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let map: ExtendedMap<String, i32> = ExtendedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ExtendedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty map with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the wrapped `HashMap`.
    #[inline]
    pub const fn as_inner(&self) -> &HashMap<K, V, S> {
        &self.inner
    }

    /// Returns the wrapped `HashMap` mutably.
    ///
    /// Writes through this reference bypass the compute-family conventions,
    /// e.g. an `Option`-valued map can store `None` here.
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut HashMap<K, V, S> {
        &mut self.inner
    }

    /// Unwraps the map into the underlying `HashMap`.
    #[inline]
    pub fn into_inner(self) -> HashMap<K, V, S> {
        self.inner
    }
}

// =============================================================================
// Operations on the native presence test
// =============================================================================

impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Computes a value for `key` only if it has no entry.
    ///
    /// If the key already has an entry, `function` is not called and the
    /// current value is returned. Otherwise a `Some` result is stored and
    /// returned; a `None` result stores nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map = ExtendedMap::from([("Key", 1)]);
    ///
    /// assert_eq!(map.compute_if_absent("Key", |_| unreachable!()), Some(&1));
    /// assert_eq!(map.compute_if_absent("New", |key| Some(key.len() as i32)), Some(&3));
    /// assert_eq!(map.compute_if_absent("Skip", |_| None), None);
    /// assert!(!map.contains_key("Skip"));
    /// ```
    pub fn compute_if_absent<F>(&mut self, key: K, function: F) -> Option<&V>
    where
        F: FnOnce(&K) -> Option<V>,
    {
        match self.inner.entry(key) {
            Entry::Occupied(entry) => Some(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let value = function(entry.key())?;
                Some(&*entry.insert(value))
            }
        }
    }

    /// Recomputes the value for `key` only if it has an entry.
    ///
    /// A `Some` result replaces the value and is returned. A `None` result
    /// removes the entry. A missing key returns `None` without calling
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map = ExtendedMap::from([("Key", 1)]);
    ///
    /// assert_eq!(map.compute_if_present("Key", |_, value| Some(value + 1)), Some(&2));
    /// assert_eq!(map.compute_if_present("Key", |_, _| None), None);
    /// assert!(map.is_empty());
    /// ```
    pub fn compute_if_present<Q, F>(&mut self, key: &Q, function: F) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&K, &V) -> Option<V>,
    {
        // `HashMap` has no borrowed-key entry API yielding both the stored key
        // and a mutable slot, so the write is a second lookup.
        let (stored_key, current) = self.inner.get_key_value(key)?;
        let outcome = function(stored_key, current);
        match outcome {
            Some(value) => self.inner.get_mut(key).map(|slot| {
                *slot = value;
                &*slot
            }),
            None => {
                trace!("compute_if_present: removing entry");
                self.inner.remove(key);
                None
            }
        }
    }

    /// Computes a value for `key` with one of two transformations.
    ///
    /// `present` is called with the stored value when the key has an entry,
    /// even if that value [`is_absent`](SameValue::is_absent); `absent` is
    /// called with just the key otherwise. The result is stored or removed
    /// as in [`compute`](Self::compute).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map: ExtendedMap<&str, Option<i32>> = ExtendedMap::new();
    /// map.insert("Key-1", None);
    ///
    /// let stored = map.compute_if(
    ///     "Key-1",
    ///     |_, value| Some(Some(value.map_or(10, |value| value + 1))),
    ///     |_| Some(Some(99)),
    /// );
    /// assert_eq!(stored, Some(&Some(10)));
    /// ```
    pub fn compute_if<P, A>(&mut self, key: K, present: P, absent: A) -> Option<&V>
    where
        P: FnOnce(&K, &V) -> Option<V>,
        A: FnOnce(&K) -> Option<V>,
    {
        match self.inner.entry(key) {
            Entry::Occupied(entry) => {
                let outcome = present(entry.key(), entry.get());
                store_or_remove(entry, outcome)
            }
            Entry::Vacant(entry) => {
                let value = absent(entry.key())?;
                Some(&*entry.insert(value))
            }
        }
    }

    /// Returns the value for `key`, or `default` if the key has no entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let map = ExtendedMap::from([("Key", 1)]);
    ///
    /// assert_eq!(map.get_or("Key", &0), &1);
    /// assert_eq!(map.get_or("Other", &0), &0);
    /// ```
    #[inline]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).unwrap_or(default)
    }

    /// Stores `value` if `key` has no entry, and returns the value now held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map = ExtendedMap::new();
    ///
    /// assert_eq!(map.set_if_absent("Key", 1), &1);
    /// assert_eq!(map.set_if_absent("Key", 2), &1);
    /// ```
    #[inline]
    pub fn set_if_absent(&mut self, key: K, value: V) -> &V {
        self.inner.entry(key).or_insert(value)
    }

    /// Applies `function` to every entry, storing or removing each result.
    ///
    /// Entries are visited in the base map's iteration order. A `None`
    /// result removes that entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map = ExtendedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// map.replace_all(|_, value| (value % 2 == 1).then(|| value * 10));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Some(&10));
    /// assert_eq!(map.get("c"), Some(&30));
    /// ```
    pub fn replace_all<F>(&mut self, mut function: F)
    where
        F: FnMut(&K, &V) -> Option<V>,
    {
        let before = self.inner.len();
        self.inner
            .retain(|key, value| match function(key, value) {
                Some(replacement) => {
                    *value = replacement;
                    true
                }
                None => false,
            });
        debug!(
            "replace_all: {} entries replaced, {} removed",
            self.inner.len(),
            before - self.inner.len()
        );
    }
}

// =============================================================================
// Operations on the present value and same-value equality
// =============================================================================

impl<K, V, S> ExtendedMap<K, V, S>
where
    K: Eq + Hash,
    V: SameValue,
    S: BuildHasher,
{
    /// Returns the present value for `key`.
    ///
    /// Like `get`, except a stored value that
    /// [`is_absent`](SameValue::is_absent) reads as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map: ExtendedMap<&str, Option<i32>> = ExtendedMap::new();
    /// map.insert("Key", None);
    ///
    /// assert_eq!(map.get("Key"), Some(&None));
    /// assert_eq!(map.present_value("Key"), None);
    /// ```
    #[inline]
    pub fn present_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).and_then(present)
    }

    /// Computes a new value for `key` from its present value.
    ///
    /// `function` is always called, with `None` when the key has no present
    /// value. A `None` result removes the entry (a no-op if there was none);
    /// `Some(value)` stores `value`. Returns the stored value, or `None` if
    /// the entry was removed.
    ///
    /// A panic in `function` unwinds with the map unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map: ExtendedMap<&str, i32> = ExtendedMap::new();
    ///
    /// let stored = map.compute("Key", |_, value| Some(value.map_or(1, |value| value + 1)));
    /// assert_eq!(stored, Some(&1));
    ///
    /// let stored = map.compute("Key", |_, value| Some(value.map_or(1, |value| value + 1)));
    /// assert_eq!(stored, Some(&2));
    ///
    /// assert_eq!(map.compute("Key", |_, _| None), None);
    /// assert!(!map.contains_key("Key"));
    /// ```
    pub fn compute<F>(&mut self, key: K, function: F) -> Option<&V>
    where
        F: FnOnce(&K, Option<&V>) -> Option<V>,
    {
        match self.try_compute(key, |key, current| {
            Ok::<_, Infallible>(function(key, current))
        }) {
            Ok(stored) => stored,
            Err(never) => match never {},
        }
    }

    /// Like [`compute`](Self::compute), for a transformation that can fail.
    ///
    /// An `Err` from `function` is returned unchanged and the entry is left
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map = ExtendedMap::from([("port", String::from("80"))]);
    ///
    /// let parsed = map.try_compute("port", |_, value| {
    ///     let port: u16 = value.map_or("0", String::as_str).parse()?;
    ///     Ok::<_, std::num::ParseIntError>(Some((port + 8000).to_string()))
    /// });
    /// assert_eq!(parsed, Ok(Some(&String::from("8080"))));
    ///
    /// map.insert("port", String::from("eighty"));
    /// assert!(map.try_compute("port", |_, value| {
    ///     value.map_or("0", String::as_str).parse::<u16>().map(|port| Some(port.to_string()))
    /// }).is_err());
    /// assert_eq!(map.get("port").map(String::as_str), Some("eighty"));
    /// ```
    pub fn try_compute<F, E>(&mut self, key: K, function: F) -> Result<Option<&V>, E>
    where
        F: FnOnce(&K, Option<&V>) -> Result<Option<V>, E>,
    {
        match self.inner.entry(key) {
            Entry::Occupied(entry) => {
                let outcome = function(entry.key(), present(entry.get()))?;
                Ok(store_or_remove(entry, outcome))
            }
            Entry::Vacant(entry) => {
                let outcome = function(entry.key(), None)?;
                Ok(outcome.map(|value| &*entry.insert(value)))
            }
        }
    }

    /// Merges `default` into the entry for `key`.
    ///
    /// Without a present value, stores and returns `default` and does not
    /// call `function`. Otherwise calls `function(current, default)` and
    /// stores or removes its result like [`compute`](Self::compute).
    ///
    /// `default` is a plain `V`, so it can never request removal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let mut map: ExtendedMap<&str, i32> = ExtendedMap::new();
    ///
    /// assert_eq!(map.merge("Key", 5, |_, _| unreachable!()), Some(&5));
    /// assert_eq!(map.merge("Key", 3, |current, default| Some(current * default)), Some(&15));
    /// ```
    pub fn merge<F>(&mut self, key: K, default: V, function: F) -> Option<&V>
    where
        F: FnOnce(&V, V) -> Option<V>,
    {
        match self.inner.entry(key) {
            Entry::Occupied(entry) => {
                let outcome = match present(entry.get()) {
                    Some(current) => function(current, default),
                    None => Some(default),
                };
                store_or_remove(entry, outcome)
            }
            Entry::Vacant(entry) => Some(&*entry.insert(default)),
        }
    }

    /// Returns `true` if any stored value is the same value as `value`.
    ///
    /// This is a linear scan over all entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let shared = Rc::new(vec![1, 2]);
    /// let map = ExtendedMap::from([("Key", Rc::clone(&shared))]);
    ///
    /// assert!(map.has_value(&shared));
    /// assert!(!map.has_value(&Rc::new(vec![1, 2])));
    /// ```
    pub fn has_value(&self, value: &V) -> bool {
        self.inner.values().any(|stored| stored.same_value(value))
    }

    /// Removes the entry for `key` if its value passes `check`.
    ///
    /// Returns whether an entry was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::{ExtendedMap, ValueCheck};
    ///
    /// let mut map = ExtendedMap::from([("key", 25)]);
    ///
    /// assert!(!map.delete("key", ValueCheck::SameAs(&10)));
    /// assert_eq!(map.get("key"), Some(&25));
    ///
    /// assert!(map.delete("key", ValueCheck::SameAs(&25)));
    /// assert!(!map.delete("key", ValueCheck::Any));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q, check: ValueCheck<'_, V>) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let admitted = self
            .inner
            .get(key)
            .is_some_and(|current| check.admits(current));
        admitted && self.inner.remove(key).is_some()
    }

    /// Replaces the value for `key` if it has an entry whose value passes
    /// `check`.
    ///
    /// Returns the value held afterwards: `value` when replaced, the current
    /// value when the check failed, `None` when the key has no entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::{ExtendedMap, ValueCheck};
    ///
    /// let mut map = ExtendedMap::from([("key", 1)]);
    ///
    /// assert_eq!(map.replace("key", 2, ValueCheck::Any), Some(&2));
    /// assert_eq!(map.replace("key", 3, ValueCheck::SameAs(&1)), Some(&2));
    /// assert_eq!(map.replace("missing", 4, ValueCheck::Any), None);
    /// assert!(!map.contains_key("missing"));
    /// ```
    pub fn replace<Q>(&mut self, key: &Q, value: V, check: ValueCheck<'_, V>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.inner.get_mut(key)?;
        if check.admits(slot) {
            *slot = value;
        }
        Some(&*slot)
    }

    /// Combines this map with `other` into a new map over the union of keys.
    ///
    /// `function` receives the present value from each side (`None` where a
    /// side has none) and is called exactly once per key: first for this
    /// map's keys, then for keys found only in `other`. `Some` results are
    /// stored; neither input is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::collections::ExtendedMap;
    ///
    /// let own = ExtendedMap::from([("Key", 10)]);
    /// let other = ExtendedMap::from([("Key", 1), ("Key-1", 5)]);
    ///
    /// let combined = own.set_all(&other, |left, right| match (left, right) {
    ///     (Some(left), Some(right)) => Some(left + right),
    ///     (left, right) => left.or(right).copied(),
    /// });
    ///
    /// assert_eq!(combined, ExtendedMap::from([("Key", 11), ("Key-1", 5)]));
    /// assert_eq!(own.get("Key"), Some(&10));
    /// ```
    pub fn set_all<W, U, H, F>(
        &self,
        other: &ExtendedMap<K, W, H>,
        mut function: F,
    ) -> ExtendedMap<K, U, S>
    where
        K: Clone,
        W: SameValue,
        S: Clone,
        H: BuildHasher,
        F: FnMut(Option<&V>, Option<&W>) -> Option<U>,
    {
        let mut combined = ExtendedMap::with_capacity_and_hasher(
            self.inner.len(),
            self.inner.hasher().clone(),
        );

        for (key, value) in &self.inner {
            if let Some(result) = function(present(value), other.present_value(key)) {
                combined.inner.insert(key.clone(), result);
            }
        }
        for (key, value) in &other.inner {
            if self.inner.contains_key(key) {
                continue;
            }
            if let Some(result) = function(None, present(value)) {
                combined.inner.insert(key.clone(), result);
            }
        }

        debug!(
            "set_all: combined {} and {} entries into {}",
            self.inner.len(),
            other.inner.len(),
            combined.inner.len()
        );
        combined
    }
}

// =============================================================================
// Delegation to the base map
// =============================================================================

impl<K, V, S> Deref for ExtendedMap<K, V, S> {
    type Target = HashMap<K, V, S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, V, S> DerefMut for ExtendedMap<K, V, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for ExtendedMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for ExtendedMap<K, V, S> {
    #[inline]
    fn from(inner: HashMap<K, V, S>) -> Self {
        Self { inner }
    }
}

impl<K, V, S> From<ExtendedMap<K, V, S>> for HashMap<K, V, S> {
    #[inline]
    fn from(map: ExtendedMap<K, V, S>) -> Self {
        map.inner
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for ExtendedMap<K, V, DefaultHashBuilder> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ExtendedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for ExtendedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V, S> IntoIterator for ExtendedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a ExtendedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ExtendedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = hash_map::IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

impl<K, V, S> PartialEq for ExtendedMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V, S> Eq for ExtendedMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ExtendedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.inner.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for ExtendedMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_map(self.inner.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for ExtendedMap<K, V, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <HashMap<K, V, S> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
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
        let map: ExtendedMap<String, i32> = ExtendedMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[rstest]
    fn test_compute_inserts_on_missing_key() {
        let mut map: ExtendedMap<&str, i32> = ExtendedMap::new();
        let stored = map.compute("Key", |_, current| {
            assert_eq!(current, None);
            Some(42)
        });
        assert_eq!(stored, Some(&42));
        assert_eq!(map.get("Key"), Some(&42));
    }

    #[rstest]
    fn test_compute_removal_on_missing_key_is_noop() {
        let mut map: ExtendedMap<&str, i32> = ExtendedMap::from([("Other", 1)]);
        assert_eq!(map.compute("Key", |_, _| None), None);
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    fn test_compute_hands_over_the_stored_key() {
        let mut map: ExtendedMap<String, usize> = ExtendedMap::new();
        map.compute("abc".to_string(), |key, _| Some(key.len()));
        assert_eq!(map.get("abc"), Some(&3));
    }

    #[rstest]
    fn test_try_compute_error_leaves_entry() {
        let mut map = ExtendedMap::from([("Key", 1)]);
        let result: Result<Option<&i32>, &str> = map.try_compute("Key", |_, _| Err("failed"));
        assert_eq!(result, Err("failed"));
        assert_eq!(map.get("Key"), Some(&1));
    }

    #[rstest]
    fn test_try_compute_error_on_missing_key_inserts_nothing() {
        let mut map: ExtendedMap<&str, i32> = ExtendedMap::new();
        let result: Result<Option<&i32>, ()> = map.try_compute("Key", |_, _| Err(()));
        assert!(result.is_err());
        assert!(!map.contains_key("Key"));
    }

    #[rstest]
    fn test_present_value_hides_absent_entries() {
        let mut map: ExtendedMap<&str, Option<i32>> = ExtendedMap::new();
        map.insert("Absent", None);
        map.insert("Present", Some(1));

        assert_eq!(map.present_value("Absent"), None);
        assert_eq!(map.present_value("Present"), Some(&Some(1)));
        assert_eq!(map.present_value("Missing"), None);
    }

    #[rstest]
    fn test_replace_all_on_empty_map() {
        let mut map: ExtendedMap<&str, i32> = ExtendedMap::new();
        map.replace_all(|_, _| unreachable!());
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_deref_mut_reaches_base_insert() {
        let mut map: ExtendedMap<&str, i32> = ExtendedMap::new();
        map.insert("Key", 1);
        assert_eq!(map.as_inner().get("Key"), Some(&1));
        map.as_inner_mut().remove("Key");
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_conversion_round_trip_with_hashmap() {
        let base: HashMap<&str, i32, DefaultHashBuilder> =
            [("a", 1), ("b", 2)].into_iter().collect();
        let map = ExtendedMap::from(base.clone());
        assert_eq!(HashMap::from(map), base);
    }

    #[rstest]
    fn test_debug_formats_as_map() {
        let map = ExtendedMap::from([("Key", 1)]);
        assert_eq!(format!("{map:?}"), r#"{"Key": 1}"#);
    }
}
