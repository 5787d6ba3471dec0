//! Pluggable sorting algorithms.
//!
//! Algorithms are registered by name and receive a permutation of element
//! indices together with a comparator. The comparator the registry builds
//! orders by key first and by original position second, so every result is
//! stable no matter which algorithm produced it.
//!
//! A process-wide registry starts with [`TIMSORT`]. Register extra
//! algorithms at start-up; lookups during sorting only take a read lock.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::sorting::{SortRegistry, TIMSORT};
//!
//! let registry = SortRegistry::new();
//! registry
//!     .register("REVERSED_INPUT", |indices: &mut [usize], compare: &dyn Fn(usize, usize) -> std::cmp::Ordering| {
//!         indices.reverse();
//!         indices.sort_by(|left, right| compare(*left, *right));
//!     }, false)
//!     .unwrap();
//! let sorted: Vec<i32> = registry.sort(vec![3, 1, 2], "REVERSED_INPUT").unwrap().collect();
//! assert_eq!(sorted, vec![1, 2, 3]);
//! assert!(registry.contains(TIMSORT));
//! ```

mod registry;

pub use registry::{
    SortAlgorithm, SortRegistry, TIMSORT, global, lookup, register, sort, sort_by_key,
};
