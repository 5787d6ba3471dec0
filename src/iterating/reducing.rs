//! Reducers and whole-sequence reorderings: `first`, `last`, `capacity`,
//! `reverse`, `flatten` and `interleave`.

use std::collections::VecDeque;

use crate::{Error, Result};

/// The first element.
///
/// # Errors
///
/// [`Error::EmptySequence`] when there is none.
pub fn first<I: IntoIterator>(iterable: I) -> Result<I::Item> {
    iterable.into_iter().next().ok_or(Error::EmptySequence)
}

/// The last element of a finite sequence.
///
/// # Errors
///
/// [`Error::EmptySequence`] when there is none.
pub fn last<I: IntoIterator>(iterable: I) -> Result<I::Item> {
    iterable.into_iter().last().ok_or(Error::EmptySequence)
}

/// Number of elements, consuming the sequence.
pub fn capacity<I: IntoIterator>(iterable: I) -> usize {
    iterable.into_iter().count()
}

/// Buffers a finite sequence and yields it back to front.
pub fn reverse<I: IntoIterator>(iterable: I) -> std::iter::Rev<std::vec::IntoIter<I::Item>> {
    iterable.into_iter().collect::<Vec<_>>().into_iter().rev()
}

/// Concatenates an iterable of iterables.
pub fn flatten<I>(iterables: I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterables.into_iter().flatten()
}

/// Round-robin merge of several sequences.
///
/// Created by [`interleave`]. Exhausted members drop out of the rotation.
#[derive(Debug, Clone)]
pub struct Interleave<I> {
    rotation: VecDeque<I>,
}

impl<I: Iterator> Iterator for Interleave<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(mut iterator) = self.rotation.pop_front() {
            if let Some(element) = iterator.next() {
                self.rotation.push_back(iterator);
                return Some(element);
            }
        }
        None
    }
}

/// Takes one element from each sequence in turn until all are exhausted.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::interleave;
///
/// let merged: Vec<i32> = interleave(vec![vec![1, 4], vec![2], vec![3, 5, 6]]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn interleave<I>(iterables: I) -> Interleave<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Interleave {
        rotation: iterables.into_iter().map(IntoIterator::into_iter).collect(),
    }
}
