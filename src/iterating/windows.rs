//! Windowing adapters: disjoint buckets, sliding windows, half-open slices
//! and the trailing `n` elements.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::{Error, Result};

/// Disjoint fixed-size buckets; the final bucket may be short.
///
/// Created by [`chop`].
#[derive(Debug, Clone)]
pub struct Chop<I> {
    inner: I,
    size: usize,
}

impl<I> Chop<I> {
    pub(crate) const fn new(inner: I, size: usize) -> Self {
        Self { inner, size }
    }
}

impl<I: Iterator> Iterator for Chop<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let bucket: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if bucket.is_empty() { None } else { Some(bucket) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

/// Splits `iterable` into buckets of `size` elements.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::chop;
///
/// let buckets: Vec<Vec<i32>> = chop(1..=5, 2).unwrap().collect();
/// assert_eq!(buckets, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chop<I: IntoIterator>(iterable: I, size: usize) -> Result<Chop<I::IntoIter>> {
    if size == 0 {
        return Err(Error::invalid_argument("size", "bucket size must be positive"));
    }
    Ok(Chop::new(iterable.into_iter(), size))
}

/// Contiguous windows advancing by `step`.
///
/// Created by [`slide`].
#[derive(Debug, Clone)]
pub struct Slide<I: Iterator> {
    inner: I,
    size: usize,
    step: usize,
    window: VecDeque<I::Item>,
    started: bool,
    done: bool,
}

impl<I: Iterator> Slide<I> {
    pub(crate) fn new(inner: I, size: usize, step: usize) -> Self {
        Self {
            inner,
            size,
            step,
            window: VecDeque::with_capacity(size),
            started: false,
            done: false,
        }
    }

    fn next_empty_window(&mut self) -> Option<Vec<I::Item>> {
        // Size zero: the empty window, then each element on its own, as a
        // window that keeps no history would be after each push.
        if !self.started {
            self.started = true;
            return Some(Vec::new());
        }
        match self.inner.by_ref().nth(self.step - 1) {
            Some(element) => Some(vec![element]),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn fill(&mut self) {
        while self.window.len() < self.size {
            match self.inner.next() {
                Some(element) => self.window.push_back(element),
                None => break,
            }
        }
    }
}

impl<I> Iterator for Slide<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.size == 0 {
            return self.next_empty_window();
        }
        if self.started {
            // Drop `step` elements from the front, pulling through any
            // that were never buffered.
            let buffered = self.step.min(self.window.len());
            self.window.drain(..buffered);
            let skipped = self.step - buffered;
            if skipped > 0 && self.inner.by_ref().nth(skipped - 1).is_none() {
                self.done = true;
                return None;
            }
            self.fill();
            if self.window.len() < self.size {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
            self.fill();
            if self.window.is_empty() {
                self.done = true;
                return None;
            }
            if self.window.len() < self.size {
                // Input shorter than one window: a single short window.
                self.done = true;
                return Some(self.window.drain(..).collect());
            }
        }
        Some(self.window.iter().cloned().collect())
    }
}

impl<I> FusedIterator for Slide<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Sliding windows of `size` elements, advancing by `step`.
///
/// Every window that fits entirely is emitted. A non-empty input shorter
/// than `size` yields one short window holding all of it. With `size == 0`
/// the empty window comes first, even for an empty input, followed by a
/// one-element window per element; `step` picks every `step`-th of those.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `step` is zero.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::slide;
///
/// let windows: Vec<Vec<i32>> = slide(1..=4, 2, 1).unwrap().collect();
/// assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
///
/// let short: Vec<Vec<i32>> = slide(1..=2, 3, 1).unwrap().collect();
/// assert_eq!(short, vec![vec![1, 2]]);
/// ```
pub fn slide<I: IntoIterator>(iterable: I, size: usize, step: usize) -> Result<Slide<I::IntoIter>> {
    if step == 0 {
        return Err(Error::invalid_argument("step", "window step must be positive"));
    }
    Ok(Slide::new(iterable.into_iter(), size, step))
}

/// Overlapping pairs `(a, b)`, `(b, c)`, ...
pub fn pairwise<I>(iterable: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut previous: Option<I::Item> = None;
    iterable.into_iter().filter_map(move |element| {
        let pair = previous.take().map(|before| (before, element.clone()));
        previous = Some(element);
        pair
    })
}

/// Half-open, stepped slice of a sequence.
///
/// Created by [`slice`].
#[derive(Debug, Clone)]
pub struct Slice<I> {
    inner: I,
    position: usize,
    next_index: usize,
    stop: Option<usize>,
    step: usize,
}

impl<I> Slice<I> {
    pub(crate) const fn new(inner: I, start: usize, stop: Option<usize>, step: usize) -> Self {
        Self {
            inner,
            position: 0,
            next_index: start,
            stop,
            step,
        }
    }
}

impl<I: Iterator> Iterator for Slice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stop.is_some_and(|stop| self.next_index >= stop) {
            return None;
        }
        let skip = self.next_index - self.position;
        let element = self.inner.nth(skip);
        self.position = self.next_index.saturating_add(1);
        if element.is_some() {
            self.next_index = self.next_index.saturating_add(self.step);
        } else {
            self.stop = Some(0);
        }
        element
    }
}

/// Elements at indices `start, start + step, ...` below `stop`
/// (unbounded when `stop` is `None`).
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `step` is zero.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::slice;
///
/// let picked: Vec<i32> = slice(0..10, 1, Some(8), 3).unwrap().collect();
/// assert_eq!(picked, vec![1, 4, 7]);
/// ```
pub fn slice<I: IntoIterator>(
    iterable: I,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<Slice<I::IntoIter>> {
    if step == 0 {
        return Err(Error::invalid_argument("step", "slice step must be positive"));
    }
    Ok(Slice::new(iterable.into_iter(), start, stop, step))
}

/// The first `count` elements.
pub fn head<I: IntoIterator>(iterable: I, count: usize) -> std::iter::Take<I::IntoIter> {
    iterable.into_iter().take(count)
}

/// The last `count` elements, buffered in a ring of at most `count` slots.
///
/// Created by [`tail`]. The upstream is drained on the first pull.
#[derive(Debug, Clone)]
pub struct Tail<I: Iterator> {
    inner: Option<I>,
    count: usize,
    buffer: VecDeque<I::Item>,
}

impl<I: Iterator> Iterator for Tail<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(inner) = self.inner.take() {
            if self.count > 0 {
                for element in inner {
                    if self.buffer.len() == self.count {
                        self.buffer.pop_front();
                    }
                    self.buffer.push_back(element);
                }
            }
        }
        self.buffer.pop_front()
    }
}

/// The trailing `count` elements of a finite sequence.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::tail;
///
/// assert_eq!(tail(1..=5, 2).collect::<Vec<_>>(), vec![4, 5]);
/// ```
pub fn tail<I: IntoIterator>(iterable: I, count: usize) -> Tail<I::IntoIter> {
    Tail {
        inner: Some(iterable.into_iter()),
        count,
        buffer: VecDeque::with_capacity(count),
    }
}
