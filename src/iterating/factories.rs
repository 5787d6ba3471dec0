//! Combinator factories.
//!
//! Each factory fixes the combinator's parameters up front and returns a
//! reusable closure from a sequence to the transformed sequence (or to a
//! reduced value), ready to be chained with ordinary function composition.
//! Parameter validation happens when the factory is called, not when the
//! returned closure runs.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::iterating::factories::{chopper, mapper};
//!
//! let double = mapper(|n: i32| n * 2);
//! let pairs = chopper(2).unwrap();
//! let result: Vec<Vec<i32>> = pairs(double(vec![1, 2, 3])).collect();
//! assert_eq!(result, vec![vec![2, 4], vec![6]]);
//! ```

use std::hash::Hash;

use super::accumulating::{Accumulate, accumulate, accumulate_right, fold, fold_right};
use super::filtering::{Reject, reject};
use super::grouping::group_by;
use super::partition::{Side, partition};
use super::reducing::{Interleave, interleave, reverse};
use super::sequence::Sequence;
use super::windows::{Chop, Slice, Slide, Tail, tail};
use crate::{Error, Result};

/// `map(function)`.
pub fn mapper<I, F, B>(function: F) -> impl Fn(I) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B + Clone,
{
    move |iterable| iterable.into_iter().map(function.clone())
}

/// Keeps elements satisfying `predicate`.
pub fn keeper<I, P>(predicate: P) -> impl Fn(I) -> std::iter::Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iterable| iterable.into_iter().filter(predicate.clone())
}

/// Drops elements satisfying `predicate`.
pub fn rejecter<I, P>(predicate: P) -> impl Fn(I) -> Reject<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iterable| reject(iterable, predicate.clone())
}

/// Elements before the first one failing `predicate`.
pub fn taker_while<I, P>(predicate: P) -> impl Fn(I) -> std::iter::TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iterable| iterable.into_iter().take_while(predicate.clone())
}

/// Elements from the first one failing `predicate` onwards.
pub fn dropper_while<I, P>(predicate: P) -> impl Fn(I) -> std::iter::SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iterable| iterable.into_iter().skip_while(predicate.clone())
}

/// Stepped half-open slice.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a zero `step`.
pub fn cutter<I: IntoIterator>(
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<impl Fn(I) -> Slice<I::IntoIter>> {
    if step == 0 {
        return Err(Error::invalid_argument("step", "slice step must be positive"));
    }
    Ok(move |iterable: I| Slice::new(iterable.into_iter(), start, stop, step))
}

/// Disjoint buckets of `size`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a zero `size`.
pub fn chopper<I: IntoIterator>(size: usize) -> Result<impl Fn(I) -> Chop<I::IntoIter>> {
    if size == 0 {
        return Err(Error::invalid_argument("size", "bucket size must be positive"));
    }
    Ok(move |iterable: I| Chop::new(iterable.into_iter(), size))
}

/// Sliding windows of `size` advancing by `step`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a zero `step`.
pub fn slider<I: IntoIterator>(size: usize, step: usize) -> Result<impl Fn(I) -> Slide<I::IntoIter>> {
    if step == 0 {
        return Err(Error::invalid_argument("step", "window step must be positive"));
    }
    Ok(move |iterable: I| Slide::new(iterable.into_iter(), size, step))
}

/// The first `count` elements.
pub fn header<I: IntoIterator>(count: usize) -> impl Fn(I) -> std::iter::Take<I::IntoIter> {
    move |iterable| iterable.into_iter().take(count)
}

/// The last `count` elements.
pub fn trailer<I: IntoIterator>(count: usize) -> impl Fn(I) -> Tail<I::IntoIter> {
    move |iterable| tail(iterable, count)
}

/// Concatenation of nested iterables.
pub fn flattener<I>() -> impl Fn(I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    |iterables| iterables.into_iter().flatten()
}

/// Left scan seeded with `init`.
pub fn accumulator<I, F, A>(operation: F, init: A) -> impl Fn(I) -> Accumulate<I::IntoIter, F, A>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A + Clone,
    A: Clone,
{
    move |iterable| accumulate(iterable, operation.clone(), init.clone())
}

/// Right scan seeded with `init`.
pub fn right_accumulator<I, F, A>(operation: F, init: A) -> impl Fn(I) -> std::vec::IntoIter<A>
where
    I: IntoIterator,
    F: FnMut(I::Item, A) -> A + Clone,
    A: Clone,
{
    move |iterable| {
        accumulate_right(iterable, operation.clone(), init.clone())
            .collect::<Vec<A>>()
            .into_iter()
    }
}

/// Left fold seeded with `init`.
pub fn folder<I, F, A>(operation: F, init: A) -> impl Fn(I) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A + Clone,
    A: Clone,
{
    move |iterable| fold(iterable, operation.clone(), init.clone())
}

/// Right fold seeded with `init`.
pub fn right_folder<I, F, A>(operation: F, init: A) -> impl Fn(I) -> A
where
    I: IntoIterator,
    F: FnMut(I::Item, A) -> A + Clone,
    A: Clone,
{
    move |iterable| fold_right(iterable, operation.clone(), init.clone())
}

/// Groups by `key` in first-seen key order.
pub fn grouper<I, K, F>(key: F) -> impl Fn(I) -> std::vec::IntoIter<(K, Vec<I::Item>)>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> K + Clone,
{
    move |iterable| group_by(iterable, key.clone())
}

/// Natural-order sort with a globally registered algorithm.
///
/// The algorithm is looked up when the returned closure runs, so it may be
/// registered after the factory is called.
pub fn sorter<I>(algorithm: impl Into<String>) -> impl Fn(I) -> Result<Sequence<std::vec::IntoIter<I::Item>>>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let algorithm = algorithm.into();
    move |iterable| crate::sorting::sort(iterable, &algorithm)
}

/// Keyed sort with a globally registered algorithm.
pub fn key_sorter<I, K, F>(
    algorithm: impl Into<String>,
    key: F,
) -> impl Fn(I) -> Result<Sequence<std::vec::IntoIter<I::Item>>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K + Clone,
{
    let algorithm = algorithm.into();
    move |iterable| crate::sorting::sort_by_key(iterable, &algorithm, key.clone())
}

/// `(failing, passing)` split by `predicate`.
pub fn separator<I, P>(predicate: P) -> impl Fn(I) -> (Side<I::IntoIter, P>, Side<I::IntoIter, P>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iterable| partition(iterable, predicate.clone())
}

/// Round-robin merge.
pub fn interleaver<I>() -> impl Fn(I) -> Interleave<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    |iterables| interleave(iterables)
}

/// Back-to-front copy of a finite sequence.
pub fn reverser<I: IntoIterator>() -> impl Fn(I) -> std::iter::Rev<std::vec::IntoIter<I::Item>> {
    |iterable| reverse(iterable)
}
