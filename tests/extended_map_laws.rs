#![cfg(feature = "map")]
//! Property-based tests for ExtendedMap.
//!
//! This module verifies that the compute family agrees with plain `HashMap`
//! updates and keeps its store-or-remove invariant, using proptest.

use std::collections::HashMap;

use extended_collections::collections::{ExtendedMap, ValueCheck};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| s)
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    -1000i32..1000i32
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..40)
}

/// A transformation that keeps even results and removes odd ones.
fn keep_even(value: i32) -> Option<i32> {
    (value % 2 == 0).then_some(value)
}

// =============================================================================
// Store-or-remove: after compute, the entry exists iff the function said so
// =============================================================================

proptest! {
    #[test]
    fn prop_compute_store_or_remove(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let mut map: ExtendedMap<String, i32> = entries.into_iter().collect();
        let expected = keep_even(value);

        let stored = map.compute(key.clone(), |_, _| keep_even(value)).copied();

        prop_assert_eq!(stored, expected);
        prop_assert_eq!(map.contains_key(&key), expected.is_some());
        prop_assert_eq!(map.get(&key).copied(), expected);
    }
}

// =============================================================================
// compute agrees with a hand-written HashMap update
// =============================================================================

proptest! {
    #[test]
    fn prop_compute_matches_hashmap_update(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        delta in arbitrary_value()
    ) {
        let mut map: ExtendedMap<String, i32> = entries.iter().cloned().collect();
        let mut reference: HashMap<String, i32> = entries.into_iter().collect();

        map.compute(key.clone(), |_, current| keep_even(current.copied().unwrap_or(0) + delta));

        match keep_even(reference.get(&key).copied().unwrap_or(0) + delta) {
            Some(value) => {
                reference.insert(key, value);
            }
            None => {
                reference.remove(&key);
            }
        }

        prop_assert_eq!(map.into_inner().into_iter().collect::<HashMap<_, _>>(), reference);
    }
}

// =============================================================================
// compute_if_absent / compute_if_present partition the key space
// =============================================================================

proptest! {
    #[test]
    fn prop_compute_if_absent_keeps_existing_value(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let mut map: ExtendedMap<String, i32> = entries.into_iter().collect();
        let before = map.get(&key).copied();

        let stored = map.compute_if_absent(key.clone(), |_| Some(value)).copied();

        prop_assert_eq!(stored, Some(before.unwrap_or(value)));
    }

    #[test]
    fn prop_compute_if_present_never_inserts(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let mut map: ExtendedMap<String, i32> = entries.into_iter().collect();
        let existed = map.contains_key(&key);
        let length = map.len();

        map.compute_if_present(&key, |_, _| Some(value));

        prop_assert_eq!(map.contains_key(&key), existed);
        prop_assert_eq!(map.len(), length);
    }
}

// =============================================================================
// merge counts occurrences
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_counts_like_fold(keys in prop::collection::vec(arbitrary_key(), 0..60)) {
        let mut counts: ExtendedMap<String, usize> = ExtendedMap::new();
        for key in &keys {
            counts.merge(key.clone(), 1, |count, one| Some(count + one));
        }

        let mut reference: HashMap<String, usize> = HashMap::new();
        for key in keys {
            *reference.entry(key).or_insert(0) += 1;
        }

        prop_assert_eq!(counts.into_inner().into_iter().collect::<HashMap<_, _>>(), reference);
    }
}

// =============================================================================
// delete / has_value
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_any_equals_remove(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let mut map: ExtendedMap<String, i32> = entries.into_iter().collect();
        let existed = map.contains_key(&key);

        prop_assert_eq!(map.delete(&key, ValueCheck::Any), existed);
        prop_assert!(!map.contains_key(&key));
    }

    #[test]
    fn prop_has_value_matches_values_scan(
        entries in arbitrary_entries(),
        value in arbitrary_value()
    ) {
        let map: ExtendedMap<String, i32> = entries.into_iter().collect();
        prop_assert_eq!(map.has_value(&value), map.values().any(|stored| *stored == value));
    }
}

// =============================================================================
// set_all: key set is the union when the function keeps everything
// =============================================================================

proptest! {
    #[test]
    fn prop_set_all_covers_union_of_keys(
        left in arbitrary_entries(),
        right in arbitrary_entries()
    ) {
        let left: ExtendedMap<String, i32> = left.into_iter().collect();
        let right: ExtendedMap<String, i32> = right.into_iter().collect();

        let combined = left.set_all(&right, |own, other| Some((own.copied(), other.copied())));

        prop_assert_eq!(
            combined.len(),
            left.len() + right.keys().filter(|key| !left.contains_key(*key)).count()
        );
        for (key, (own, other)) in &combined {
            prop_assert_eq!(*own, left.get(key).copied());
            prop_assert_eq!(*other, right.get(key).copied());
        }
    }
}

// =============================================================================
// replace_all matches retain + map
// =============================================================================

proptest! {
    #[test]
    fn prop_replace_all_matches_filter_map(entries in arbitrary_entries()) {
        let mut map: ExtendedMap<String, i32> = entries.iter().cloned().collect();
        let reference: HashMap<String, i32> = entries
            .into_iter()
            .collect::<HashMap<_, _>>()
            .into_iter()
            .filter_map(|(key, value)| keep_even(value * 3 + 1).map(|value| (key, value)))
            .collect();

        map.replace_all(|_, value| keep_even(value * 3 + 1));

        prop_assert_eq!(map.into_inner().into_iter().collect::<HashMap<_, _>>(), reference);
    }
}
