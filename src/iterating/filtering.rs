//! Complement of [`Iterator::filter`].

use std::iter::FusedIterator;

/// Elements failing the predicate.
///
/// Created by [`reject`].
#[derive(Debug, Clone)]
pub struct Reject<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P> Iterator for Reject<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|element| !predicate(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, P> FusedIterator for Reject<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Drops every element for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::reject;
///
/// let odd: Vec<i32> = reject(1..=6, |n| n % 2 == 0).collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn reject<I, P>(iterable: I, predicate: P) -> Reject<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Reject {
        inner: iterable.into_iter(),
        predicate,
    }
}
