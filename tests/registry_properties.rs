//! Property tests for registry ordering and counting.

mod common;

use std::collections::BTreeMap;

use common::{is_alphabetical, pairs, words};
use proptest::prelude::*;
use word_frequency::WordRegistry;

fn word() -> impl Strategy<Value = String> {
    "[a-e']{1,3}"
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..80)
}

fn expected_counts(input: &[String]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for word in input {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    counts
}

fn build(input: &[String]) -> WordRegistry {
    let mut registry = WordRegistry::new();
    for word in input {
        registry.insert(word).unwrap();
    }
    registry
}

proptest! {
    #[test]
    fn insert_keeps_chain_sorted_and_unique(input in word_list()) {
        let mut registry = WordRegistry::new();
        for word in &input {
            registry.insert(word).unwrap();
            prop_assert!(is_alphabetical(&registry));
            prop_assert!(registry.is_consistent());
        }

        let expected: Vec<(String, u64)> = expected_counts(&input).into_iter().collect();
        prop_assert_eq!(pairs(&registry), expected);
    }

    #[test]
    fn remove_drops_exactly_one_entry(input in word_list(), target in word()) {
        let mut registry = build(&input);
        let before = registry.size();
        let present = registry.find(&target);

        let result = registry.remove(&target);

        prop_assert!(!registry.find(&target));
        prop_assert!(registry.is_consistent());
        if present {
            prop_assert!(result.is_ok());
            prop_assert_eq!(registry.size(), before - 1);
        } else {
            prop_assert_eq!(result.is_ok(), before == 0);
            prop_assert_eq!(registry.size(), before);
        }
    }

    #[test]
    fn frequency_sort_is_an_ordered_permutation(input in word_list()) {
        let mut registry = build(&input);
        let mut before = pairs(&registry);

        registry.frequency_sort();

        prop_assert!(registry.is_consistent());
        let after = pairs(&registry);
        prop_assert!(after.windows(2).all(|w| w[0].1 <= w[1].1));
        prop_assert!(after
            .windows(2)
            .filter(|w| w[0].1 == w[1].1)
            .all(|w| w[0].0 < w[1].0));

        let mut sorted_after = after.clone();
        sorted_after.sort();
        before.sort();
        prop_assert_eq!(sorted_after, before);
    }

    #[test]
    fn merge_sort_restores_alphabetical_order(input in word_list()) {
        let mut registry = build(&input);
        let alphabetical = pairs(&registry);

        registry.frequency_sort();
        registry.merge_sort();

        prop_assert!(registry.is_consistent());
        prop_assert_eq!(pairs(&registry), alphabetical.clone());

        registry.merge_sort();
        prop_assert_eq!(pairs(&registry), alphabetical);
    }

    #[test]
    fn merge_sort_ignores_insertion_order(input in word_list()) {
        let mut reversed: Vec<String> = input.clone();
        reversed.reverse();

        let mut first = build(&input);
        let mut second = build(&reversed);
        first.merge_sort();
        second.merge_sort();

        prop_assert_eq!(words(&first), words(&second));
    }

    #[test]
    fn max_frequency_matches_model(input in word_list()) {
        let registry = build(&input);
        let expected = expected_counts(&input).into_values().max().unwrap_or(0);
        prop_assert_eq!(registry.max_frequency(), expected);
    }
}
