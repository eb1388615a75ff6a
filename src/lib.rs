//! # extended-collections
//!
//! Compute-style updates, conditional replace, merge and union over the
//! standard library's `HashMap` and `HashSet`.
//!
//! ## Overview
//!
//! The standard hash containers leave out several convenience operations
//! that other ecosystems ship in their base libraries. This crate adds them
//! through two thin wrappers:
//!
//! - **`ExtendedMap`**: `compute`, `compute_if_absent`, `compute_if_present`,
//!   `compute_if`, `merge`, `has_value`, `get_or`, conditional `delete` and
//!   `replace`, `replace_all`, `set_all`, `set_if_absent`
//! - **`ExtendedSet`**: `union`, `intersection`, `difference` returning new sets
//!
//! Both dereference to the wrapped container, so every `HashMap` / `HashSet`
//! method stays available.
//!
//! ## Feature Flags
//!
//! - `map`: `ExtendedMap` (default)
//! - `set`: `ExtendedSet` (default)
//! - `serde`: `Serialize` / `Deserialize` implementations
//! - `fxhash`: use `rustc-hash` as the default hasher
//! - `ahash`: use `ahash` as the default hasher
//! - `full`: `map`, `set` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use extended_collections::prelude::*;
//!
//! let mut inventory = ExtendedMap::from([("apple", 3), ("pear", 1)]);
//!
//! // Sell one pear: the entry disappears when the count reaches zero.
//! inventory.compute_if_present("pear", |_, count| (*count > 1).then(|| count - 1));
//! assert!(!inventory.contains_key("pear"));
//!
//! // Restock apples, starting a new entry if there was none.
//! inventory.merge("apple", 5, |count, delivered| Some(count + delivered));
//! assert_eq!(inventory.get("apple"), Some(&8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types and their parameter types.
///
/// # Usage
///
/// ```rust
/// use extended_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
}

pub mod collections;
