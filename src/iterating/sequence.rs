//! The one-pass lazy sequence every combinator speaks.
//!
//! Any Rust [`Iterator`] already satisfies the pull contract: `next` yields
//! either an element or the end marker. [`Sequence`] adds the advisory
//! finiteness hint and guarantees that once the end marker was seen, every
//! later pull keeps reporting the end.

use std::iter::FusedIterator;

/// A fused, single-use lazy sequence carrying an advisory finiteness hint.
///
/// The hint is never enforced: wrapping an endless iterator with
/// [`Sequence::finite`] only misinforms consumers that choose to look at it.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::Sequence;
///
/// let mut sequence = Sequence::finite(vec![1, 2]);
/// assert!(sequence.is_finite());
/// assert_eq!(sequence.next(), Some(1));
/// assert_eq!(sequence.next(), Some(2));
/// assert_eq!(sequence.next(), None);
/// assert_eq!(sequence.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    inner: Option<I>,
    finite: bool,
}

impl<I: Iterator> Sequence<I> {
    /// Wraps an iterable known (or believed) to end.
    pub fn finite<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: Some(iterable.into_iter()),
            finite: true,
        }
    }

    /// Wraps an iterable that may never end.
    pub fn infinite<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: Some(iterable.into_iter()),
            finite: false,
        }
    }

    /// Advisory: whether the producer declared itself finite.
    pub const fn is_finite(&self) -> bool {
        self.finite
    }

    /// Whether the end marker has already been observed.
    pub const fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.as_mut()?.next();
        if element.is_none() {
            self.inner = None;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: Iterator> FusedIterator for Sequence<I> {}

/// Returns the one-element sequence `{value}`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::expand;
///
/// assert_eq!(expand("x").collect::<Vec<_>>(), vec!["x"]);
/// ```
pub fn expand<T>(value: T) -> Sequence<std::iter::Once<T>> {
    Sequence::finite(std::iter::once(value))
}
