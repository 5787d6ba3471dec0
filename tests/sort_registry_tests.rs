#![cfg(feature = "iterating")]
//! Integration tests for the process-wide and scoped sort registries.

use std::cmp::Ordering;

use lazyfn::Error;
use lazyfn::iterating::LazyIteratorExt;
use lazyfn::iterating::factories::{key_sorter, sorter};
use lazyfn::sorting::{SortRegistry, TIMSORT, global, lookup, register};
use rstest::rstest;

fn insertion_sort(indices: &mut [usize], compare: &dyn Fn(usize, usize) -> Ordering) {
    for end in 1..indices.len() {
        let mut position = end;
        while position > 0 && compare(indices[position - 1], indices[position]) == Ordering::Greater {
            indices.swap(position - 1, position);
            position -= 1;
        }
    }
}

fn heap_sort(indices: &mut [usize], compare: &dyn Fn(usize, usize) -> Ordering) {
    let mut heap: std::collections::BinaryHeap<std::cmp::Reverse<Keyed<'_>>> = indices
        .iter()
        .map(|&index| std::cmp::Reverse(Keyed { index, compare }))
        .collect();
    for slot in indices.iter_mut() {
        if let Some(std::cmp::Reverse(keyed)) = heap.pop() {
            *slot = keyed.index;
        }
    }
}

struct Keyed<'a> {
    index: usize,
    compare: &'a dyn Fn(usize, usize) -> Ordering,
}

impl PartialEq for Keyed<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.compare)(self.index, other.index) == Ordering::Equal
    }
}

impl Eq for Keyed<'_> {}

impl PartialOrd for Keyed<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.compare)(self.index, other.index)
    }
}

#[rstest]
fn global_registry_starts_with_timsort() {
    assert!(global().contains(TIMSORT));
    assert!(lookup(TIMSORT).is_ok());
}

#[rstest]
fn registered_algorithms_are_found_by_factories() {
    register("INSERTION_FOR_FACTORIES", insertion_sort, true).unwrap();
    let sort = sorter("INSERTION_FOR_FACTORIES");
    assert_eq!(sort(vec![3, 1, 2]).unwrap().collect::<Vec<_>>(), vec![1, 2, 3]);

    let by_length = key_sorter("INSERTION_FOR_FACTORIES", |word: &&str| word.len());
    let sorted: Vec<&str> = by_length(vec!["ccc", "b", "aa", "d"]).unwrap().collect();
    assert_eq!(sorted, vec!["b", "d", "aa", "ccc"]);
}

#[rstest]
fn factories_resolve_names_lazily() {
    let sort = sorter::<Vec<i32>>("REGISTERED_AFTER_THE_FACTORY");
    assert!(matches!(sort(vec![1]), Err(Error::AlgorithmNotFound(_))));
    register("REGISTERED_AFTER_THE_FACTORY", insertion_sort, true).unwrap();
    assert!(sort(vec![1]).is_ok());
}

#[rstest]
fn unstable_algorithms_still_sort_stably() {
    let registry = SortRegistry::new();
    registry.register("HEAP", heap_sort, false).unwrap();
    let records = vec![("b", 1), ("a", 2), ("b", 3), ("a", 4), ("c", 5)];
    let sorted: Vec<(&str, i32)> = registry
        .sort_by_key(records, "HEAP", |record| record.0)
        .unwrap()
        .collect();
    assert_eq!(sorted, vec![("a", 2), ("a", 4), ("b", 1), ("b", 3), ("c", 5)]);
}

#[rstest]
fn scoped_registries_are_independent() {
    let registry = SortRegistry::empty();
    registry.register("LOCAL", insertion_sort, false).unwrap();
    assert!(!global().contains("LOCAL"));
    assert_eq!(registry.names(), vec!["LOCAL".to_owned()]);
    assert!(matches!(
        registry.register("LOCAL", insertion_sort, false),
        Err(Error::AlgorithmAlreadyRegistered(name)) if name == "LOCAL"
    ));
}

#[rstest]
fn method_syntax_sorts_through_the_global_registry() {
    let sorted: Vec<char> = "registry".chars().sort_with(TIMSORT).unwrap().collect();
    assert_eq!(sorted.iter().collect::<String>(), "egirrsty");
    let by_key: Vec<i32> = vec![-3, 1, -2].into_iter().sort_with_key(TIMSORT, |n: &i32| n.abs()).unwrap().collect();
    assert_eq!(by_key, vec![1, -2, -3]);
}
