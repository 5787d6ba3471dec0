//! Method-call syntax for the sequence combinators.

use std::hash::Hash;

use super::accumulating::{Accumulate, accumulate};
use super::grouping::group_by;
use super::partition::{Side, partition};
use super::reducing::{first, last};
use super::sequence::Sequence;
use super::tee::{Tee, tee};
use super::windows::{Chop, Slice, Slide, Tail, chop, slice, slide, tail};
use crate::Result;

/// Extension methods available on every iterator.
///
/// Names avoid the ones [`Iterator`] already defines (`partition`, `last`,
/// `fold`), so the lazy variants are spelled `separate`, `last_element`
/// and so on.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::LazyIteratorExt;
///
/// let windows: Vec<Vec<i32>> = (1..=4).slide(3, 1).unwrap().collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
///
/// let (small, large) = (1..=6).separate(|n: &i32| *n > 3);
/// assert_eq!(large.collect::<Vec<_>>(), vec![4, 5, 6]);
/// assert_eq!(small.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub trait LazyIteratorExt: Iterator + Sized {
    /// Wraps the iterator with a finiteness hint.
    fn into_sequence(self, finite: bool) -> Sequence<Self> {
        if finite {
            Sequence::finite(self)
        } else {
            Sequence::infinite(self)
        }
    }

    /// See [`chop`](super::chop).
    ///
    /// # Errors
    ///
    /// Zero `size`.
    fn chop(self, size: usize) -> Result<Chop<Self>> {
        chop(self, size)
    }

    /// See [`slide`](super::slide).
    ///
    /// # Errors
    ///
    /// Zero `step`.
    fn slide(self, size: usize, step: usize) -> Result<Slide<Self>> {
        slide(self, size, step)
    }

    /// See [`slice`](super::slice).
    ///
    /// # Errors
    ///
    /// Zero `step`.
    fn cut(self, start: usize, stop: Option<usize>, step: usize) -> Result<Slice<Self>> {
        slice(self, start, stop, step)
    }

    /// See [`tail`](super::tail).
    fn tail(self, count: usize) -> Tail<Self> {
        tail(self, count)
    }

    /// See [`accumulate`](super::accumulate).
    fn accumulate<F, A>(self, operation: F, init: A) -> Accumulate<Self, F, A>
    where
        F: FnMut(A, Self::Item) -> A,
        A: Clone,
    {
        accumulate(self, operation, init)
    }

    /// See [`partition`](super::partition); returns `(failing, passing)`.
    fn separate<P>(self, predicate: P) -> (Side<Self, P>, Side<Self, P>)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        partition(self, predicate)
    }

    /// See [`tee`](super::tee).
    fn tee(self, count: usize) -> Vec<Tee<Self>>
    where
        Self::Item: Clone,
    {
        tee(self, count)
    }

    /// See [`group_by`](super::group_by).
    fn group_by<K, F>(self, key: F) -> std::vec::IntoIter<(K, Vec<Self::Item>)>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        group_by(self, key)
    }

    /// See [`first`](super::first).
    ///
    /// # Errors
    ///
    /// Empty sequence.
    fn first_element(self) -> Result<Self::Item> {
        first(self)
    }

    /// See [`last`](super::last).
    ///
    /// # Errors
    ///
    /// Empty sequence.
    fn last_element(self) -> Result<Self::Item> {
        last(self)
    }

    /// Sorts with a globally registered algorithm.
    ///
    /// # Errors
    ///
    /// Unknown algorithm.
    fn sort_with(self, algorithm: &str) -> Result<Sequence<std::vec::IntoIter<Self::Item>>>
    where
        Self::Item: Ord,
    {
        crate::sorting::sort(self, algorithm)
    }

    /// Sorts by key with a globally registered algorithm.
    ///
    /// # Errors
    ///
    /// Unknown algorithm.
    fn sort_with_key<K, F>(
        self,
        algorithm: &str,
        key: F,
    ) -> Result<Sequence<std::vec::IntoIter<Self::Item>>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        crate::sorting::sort_by_key(self, algorithm, key)
    }
}

impl<I: Iterator> LazyIteratorExt for I {}
