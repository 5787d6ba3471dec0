//! # lazyfn
//!
//! Composable lazy sequence pipelines, a function algebra with
//! signature-directed currying, and tail-first stream reversal.
//!
//! ## Overview
//!
//! - **Sequences**: chop, slide, slice, tail, accumulate, group, sort,
//!   transpose, plus fan-out adapters (tee, partition) that share one
//!   upstream iterator between several consumers.
//! - **Function algebra**: compose, cleave, combine, constant, flip,
//!   partial application from either end, negation and predicate junctions
//!   over dynamically typed values.
//! - **Currying**: functions carry an explicit parameter signature; a curried
//!   call with too few arguments returns a new curried function instead of
//!   failing.
//! - **Replication**: deep copies of mutable values and independent lazy
//!   copies of iterators.
//! - **Stream reversal**: lines of a seekable byte or text stream, last line
//!   first, read in fixed-size batches from the tail.
//!
//! ## Feature Flags
//!
//! - `iterating`: sequence combinators and the sort registry
//! - `functional`: values, signatures, the function algebra and replication
//! - `text`: encodings and separator-aware splitting
//! - `reversal`: stream reversal (implies `text`)
//! - `serde`: serialization of options and signatures
//! - `fxhash`: faster hashing for `group_by` key tables
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyfn::prelude::*;
//!
//! let windows: Vec<Vec<i32>> = (1..=4).slide(2, 2).unwrap().collect();
//! assert_eq!(windows, vec![vec![1, 2], vec![3, 4]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazyfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};

    #[cfg(feature = "iterating")]
    pub use crate::iterating::LazyIteratorExt;

    #[cfg(feature = "iterating")]
    pub use crate::sorting::{SortAlgorithm, SortRegistry, TIMSORT};

    #[cfg(feature = "functional")]
    pub use crate::functional::{Arguments, Function, Value};

    #[cfg(feature = "functional")]
    pub use crate::signature::{Parameter, ParameterKind, PlainSignature, Signature};

    #[cfg(feature = "functional")]
    pub use crate::replication::replicate;

    #[cfg(feature = "text")]
    pub use crate::text::{Encoding, Splittable};

    #[cfg(feature = "reversal")]
    pub use crate::reversal::{ReversalOptions, TextReversalOptions, reverse_bytes, reverse_text};
}

pub mod error;

pub use error::{Error, Result};

#[cfg(feature = "iterating")]
pub mod iterating;

#[cfg(feature = "iterating")]
pub mod sorting;

#[cfg(feature = "functional")]
pub mod signature;

#[cfg(feature = "functional")]
pub mod functional;

#[cfg(feature = "functional")]
pub mod replication;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "reversal")]
pub mod reversal;
