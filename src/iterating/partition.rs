//! Two-way lazy split of one upstream by a predicate.
//!
//! Both sides share the upstream. Pulling from a side classifies upstream
//! elements one at a time until one belongs to it; elements belonging to the
//! other side are parked in that side's FIFO. Each element is classified
//! exactly once and moved to the side it belongs to, so the two sides never
//! observe the same value.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

struct PartitionState<I: Iterator, P> {
    upstream: I,
    predicate: P,
    // Index 0 holds failing elements, index 1 passing ones.
    queues: [VecDeque<I::Item>; 2],
}

impl<I, P> PartitionState<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    fn pull(&mut self, side: usize) -> Option<I::Item> {
        if let Some(element) = self.queues[side].pop_front() {
            return Some(element);
        }
        loop {
            let element = self.upstream.next()?;
            let belongs_to = usize::from((self.predicate)(&element));
            if belongs_to == side {
                return Some(element);
            }
            self.queues[belongs_to].push_back(element);
            tracing::trace!(
                buffered = self.queues[belongs_to].len(),
                passing = belongs_to == 1,
                "partition parked an element for the other side"
            );
        }
    }
}

/// One side of a [`partition`].
pub struct Side<I: Iterator, P> {
    state: Rc<RefCell<PartitionState<I, P>>>,
    side: usize,
}

impl<I: Iterator, P> Side<I, P> {
    /// `true` for the side that receives elements satisfying the predicate.
    pub const fn is_passing(&self) -> bool {
        self.side == 1
    }

    /// Number of already classified elements waiting on this side.
    pub fn buffered(&self) -> usize {
        self.state.borrow().queues[self.side].len()
    }
}

impl<I, P> Iterator for Side<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.borrow_mut().pull(self.side)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let state = self.state.borrow();
        let buffered = state.queues[self.side].len();
        let (_, upper) = state.upstream.size_hint();
        (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
    }
}

impl<I: Iterator, P> fmt::Debug for Side<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Side")
            .field("passing", &self.is_passing())
            .field("buffered", &self.buffered())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(
    Side<std::vec::IntoIter<i32>, fn(&i32) -> bool>: Send, Sync
);

/// Splits `iterable` into `(failing, passing)` lazy sequences.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::partition;
///
/// let (odd, even) = partition(1..=6, |number: &i32| number % 2 == 0);
/// assert_eq!(even.collect::<Vec<_>>(), vec![2, 4, 6]);
/// assert_eq!(odd.collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub fn partition<I, P>(iterable: I, predicate: P) -> (Side<I::IntoIter, P>, Side<I::IntoIter, P>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let state = Rc::new(RefCell::new(PartitionState {
        upstream: iterable.into_iter(),
        predicate,
        queues: [VecDeque::new(), VecDeque::new()],
    }));
    (
        Side {
            state: Rc::clone(&state),
            side: 0,
        },
        Side { state, side: 1 },
    )
}
