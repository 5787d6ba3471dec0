//! Lazy, single-pass sequence pipelines.
//!
//! Every combinator here is an ordinary [`Iterator`] adapter: nothing runs
//! until a consumer pulls. Fan-out adapters ([`tee`], [`partition`],
//! [`transpose_lazy`]) share one upstream between several consumers and
//! buffer only what a lagging consumer has not drained yet.
//!
//! The same combinators are available three ways:
//!
//! - free functions (`chop(iterable, 3)`),
//! - methods through [`LazyIteratorExt`] (`iter.chop(3)`),
//! - reusable closures from [`factories`] (`chopper(3)?`), for feeding to
//!   function composition.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::iterating::{accumulate, group_by, tee};
//!
//! let running: Vec<i32> = accumulate(1..=4, |total, n| total + n, 0).collect();
//! assert_eq!(running, vec![0, 1, 3, 6, 10]);
//!
//! let groups: Vec<(bool, Vec<i32>)> = group_by(1..=5, |n| n % 2 == 0).collect();
//! assert_eq!(groups, vec![(false, vec![1, 3, 5]), (true, vec![2, 4])]);
//!
//! let mut copies = tee(vec!['a', 'b'], 2);
//! let second = copies.pop().unwrap();
//! let first = copies.pop().unwrap();
//! assert_eq!(first.collect::<String>(), "ab");
//! assert_eq!(second.collect::<String>(), "ab");
//! ```

mod accumulating;
mod ext;
mod filtering;
mod grouping;
mod partition;
mod reducing;
mod sequence;
mod tee;
mod transposing;
mod windows;

pub mod factories;

pub use accumulating::{Accumulate, accumulate, accumulate_right, fold, fold_right};
pub use ext::LazyIteratorExt;
pub use filtering::{Reject, reject};
pub use grouping::group_by;
pub use partition::{Side, partition};
pub use reducing::{Interleave, capacity, first, flatten, interleave, last, reverse};
pub use sequence::{Sequence, expand};
pub use tee::{Duplicate, Tee, duplicate, tee, tee_with};
pub use transposing::{Column, transpose, transpose_lazy};
pub use windows::{Chop, Slice, Slide, Tail, chop, head, pairwise, slice, slide, tail};

pub use crate::sorting::{sort, sort_by_key};
