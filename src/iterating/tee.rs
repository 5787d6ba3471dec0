//! One-to-N fan-out of a single upstream iterator.
//!
//! Every consumer owns a FIFO queue inside shared state. Pulling from
//! consumer `i` only touches the upstream when queue `i` is empty; the
//! fresh element is then duplicated and one copy is appended to every other
//! queue. Memory therefore grows with the lag between the fastest and the
//! slowest consumer, and nothing else.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Strategy that turns one upstream element into `count` copies.
pub type Duplicate<T> = fn(T, usize) -> Vec<T>;

fn clone_n<T: Clone>(element: T, count: usize) -> Vec<T> {
    std::iter::repeat_n(element, count).collect()
}

struct TeeState<I: Iterator> {
    upstream: I,
    queues: Vec<VecDeque<I::Item>>,
    duplicate: Duplicate<I::Item>,
}

impl<I: Iterator> TeeState<I> {
    fn pull(&mut self, index: usize) -> Option<I::Item> {
        if let Some(element) = self.queues[index].pop_front() {
            return Some(element);
        }
        let element = self.upstream.next()?;
        let mut copies = (self.duplicate)(element, self.queues.len());
        debug_assert_eq!(
            copies.len(),
            self.queues.len(),
            "duplicate must return one copy per consumer"
        );
        // Copies are handed out back to front so the owner can take its own
        // without shifting the vector.
        let mut own = None;
        for position in (0..self.queues.len()).rev() {
            let copy = copies.pop();
            if position == index {
                own = copy;
            } else if let Some(copy) = copy {
                self.queues[position].push_back(copy);
            }
        }
        if self.queues.iter().any(|queue| queue.len() > 1) {
            tracing::trace!(
                consumer = index,
                longest = self.queues.iter().map(VecDeque::len).max().unwrap_or(0),
                "tee consumers are lagging"
            );
        }
        own
    }
}

/// One consumer of a teed iterator.
///
/// Consumers share their upstream through reference counting and are
/// therefore confined to a single thread.
pub struct Tee<I: Iterator> {
    state: Rc<RefCell<TeeState<I>>>,
    index: usize,
}

impl<I: Iterator> Tee<I> {
    /// Number of elements waiting in this consumer's queue.
    pub fn buffered(&self) -> usize {
        self.state.borrow().queues[self.index].len()
    }

    /// Position of this consumer among its siblings.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<I: Iterator> Iterator for Tee<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.borrow_mut().pull(self.index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let state = self.state.borrow();
        let buffered = state.queues[self.index].len();
        let (lower, upper) = state.upstream.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> fmt::Debug for Tee<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Tee")
            .field("index", &self.index)
            .field("buffered", &self.buffered())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(Tee<std::vec::IntoIter<i32>>: Send, Sync);

/// Splits `iterable` into `count` independent consumers of the same
/// elements.
///
/// `count == 0` returns no consumers and leaves the upstream untouched.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::tee;
///
/// let mut consumers = tee(vec![1, 2, 3], 2);
/// let second = consumers.pop().unwrap();
/// let first = consumers.pop().unwrap();
/// assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(first.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn tee<I>(iterable: I, count: usize) -> Vec<Tee<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    tee_with(iterable, count, clone_n::<I::Item>)
}

/// Like [`tee`], but every upstream element is turned into per-consumer
/// copies by `duplicate`.
///
/// `duplicate(element, count)` must return exactly `count` values; debug
/// builds check this on every pull. Replication
/// uses this to hand each consumer a deep copy taken at pull time.
pub fn tee_with<I>(
    iterable: I,
    count: usize,
    duplicate: Duplicate<I::Item>,
) -> Vec<Tee<I::IntoIter>>
where
    I: IntoIterator,
{
    if count == 0 {
        return Vec::new();
    }
    let state = Rc::new(RefCell::new(TeeState {
        upstream: iterable.into_iter(),
        queues: (0..count).map(|_| VecDeque::new()).collect(),
        duplicate,
    }));
    (0..count)
        .map(|index| Tee {
            state: Rc::clone(&state),
            index,
        })
        .collect()
}

/// Two independent consumers of the same iterable.
pub fn duplicate<I>(iterable: I) -> (Tee<I::IntoIter>, Tee<I::IntoIter>)
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut consumers = tee(iterable, 2).into_iter();
    match (consumers.next(), consumers.next()) {
        (Some(first), Some(second)) => (first, second),
        _ => unreachable!("tee returns exactly `count` consumers"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn zero_consumers_never_pull() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let upstream = (0..5).inspect(move |_| counter.set(counter.get() + 1));
        assert!(tee(upstream, 0).is_empty());
        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    fn pulls_upstream_once_per_element() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let upstream = (0..4).inspect(move |_| counter.set(counter.get() + 1));
        let consumers = tee(upstream, 3);
        let collected: Vec<Vec<i32>> = consumers.into_iter().map(Iterator::collect).collect();
        assert_eq!(collected, vec![vec![0, 1, 2, 3]; 3]);
        assert_eq!(pulled.get(), 4);
    }

    #[rstest]
    fn lagging_consumer_buffers_only_its_backlog() {
        let mut consumers = tee(0..10, 2);
        let mut slow = consumers.pop().unwrap();
        let mut fast = consumers.pop().unwrap();
        for _ in 0..4 {
            fast.next();
        }
        assert_eq!(slow.buffered(), 4);
        assert_eq!(fast.buffered(), 0);
        assert_eq!(slow.next(), Some(0));
        assert_eq!(slow.buffered(), 3);
    }

    #[rstest]
    fn interleaved_pulls_keep_order() {
        let (mut left, mut right) = duplicate("abc".chars());
        assert_eq!(left.next(), Some('a'));
        assert_eq!(right.next(), Some('a'));
        assert_eq!(right.next(), Some('b'));
        assert_eq!(left.next(), Some('b'));
        assert_eq!(left.next(), Some('c'));
        assert_eq!(right.next(), Some('c'));
        assert_eq!(left.next(), None);
        assert_eq!(right.next(), None);
    }

    #[rstest]
    fn custom_duplication_is_applied_per_pull() {
        let consumers = tee_with(vec![1, 2], 2, |element: i32, count| {
            (0..count).map(|index| element * 10 + i32::try_from(index).unwrap_or(0)).collect()
        });
        let collected: Vec<Vec<i32>> = consumers.into_iter().map(Iterator::collect).collect();
        assert_eq!(collected, vec![vec![10, 20], vec![11, 21]]);
    }

    #[rstest]
    fn duplicate_shares_one_upstream() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let (left, right) = duplicate((0..3).inspect(move |_| counter.set(counter.get() + 1)));
        assert_eq!((left.index(), right.index()), (0, 1));
        assert_eq!(left.collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(right.collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(pulled.get(), 3);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[should_panic(expected = "one copy per consumer")]
    fn short_duplication_is_caught() {
        let mut consumers = tee_with(vec![1], 3, |element: i32, _| vec![element]);
        consumers[0].next();
    }

    #[rstest]
    fn size_hint_counts_backlog() {
        let mut consumers = tee(vec![1, 2, 3], 2);
        let slow = consumers.pop().unwrap();
        let mut fast = consumers.pop().unwrap();
        fast.next();
        assert_eq!(slow.size_hint(), (3, Some(3)));
        assert_eq!(fast.size_hint(), (2, Some(2)));
    }
}
