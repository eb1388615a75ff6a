//! Extended hash map and hash set.
//!
//! This module wraps the standard library's hash containers and adds the
//! operations they lack:
//!
//! - [`ExtendedMap`]: compute-family updates (`compute`, `compute_if_absent`,
//!   `compute_if_present`, `compute_if`, `merge`), conditional `delete` and
//!   `replace`, `replace_all`, `set_all` and `set_if_absent`
//! - [`ExtendedSet`]: `union`, `intersection` and `difference` that build a
//!   new set
//! - [`SameValue`]: the value equality used by the conditional operations
//! - [`ValueCheck`]: the optional expected-value parameter
//!
//! # Absence
//!
//! `None` is the only way to say "no entry". A transformation that returns
//! `None` removes the entry, and an operation that finds no entry returns
//! `None`; nothing panics on a missing key.
//!
//! # Examples
//!
//! ## `ExtendedMap`
//!
//! ```rust
//! use extended_collections::collections::ExtendedMap;
//!
//! let mut map = ExtendedMap::from([("Key", 1)]);
//!
//! map.compute("Key", |_, value| value.map(|value| value + 1));
//! assert_eq!(map.get("Key"), Some(&2));
//!
//! // `compute_if_absent` never touches an existing entry.
//! assert_eq!(map.compute_if_absent("Key", |_| Some(100)), Some(&2));
//! ```
//!
//! ## `ExtendedSet`
//!
//! ```rust
//! use extended_collections::collections::ExtendedSet;
//!
//! let set = ExtendedSet::from(["a"]);
//! let union = set.union(&ExtendedSet::from(["a", "b"]));
//!
//! assert_eq!(union.len(), 2);
//! assert_eq!(set.len(), 1);
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hash builder used by [`ExtendedMap::new`] and [`ExtendedSet::new`].
///
/// With the `ahash` feature this is `ahash::RandomState`; otherwise, with
/// the `fxhash` feature, `rustc_hash::FxBuildHasher`; otherwise the
/// standard library's `RandomState`.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`ExtendedMap::new`] and [`ExtendedSet::new`].
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`ExtendedMap::new`] and [`ExtendedSet::new`].
#[cfg(not(any(feature = "ahash", feature = "fxhash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod check;
#[cfg(feature = "map")]
mod map;
mod same_value;
#[cfg(feature = "set")]
mod set;

pub use check::ValueCheck;
#[cfg(feature = "map")]
pub use map::ExtendedMap;
pub use same_value::SameValue;
#[cfg(feature = "set")]
pub use set::ExtendedSet;

// =============================================================================
// Tests
// =============================================================================
