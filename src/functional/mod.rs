//! Function algebra over dynamically typed values.
//!
//! Functions take [`Arguments`] (positional plus keyword [`Value`]s) and
//! declare a [`Signature`](crate::signature::Signature). Combinators build
//! new functions out of existing ones without running anything:
//!
//! - [`compose`], [`cleave`], [`combine`] wire several functions together,
//! - [`constant`], [`flip`], [`negate`], [`pack`] adapt a single one,
//! - [`partial_left`] and [`partial_right`] store arguments,
//! - [`curry`] collects arguments until the signature is satisfied,
//! - [`conjoin`], [`disjoin`] and [`exclusive_disjoin`] combine predicates.
//!
//! [`builtins`] provides a few natives to build with.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::functional::{Arguments, Value, builtins, compose, curry, partial_left};
//!
//! let total = compose([builtins::sum(), builtins::range()]).unwrap();
//! assert_eq!(total.call1(10), Ok(Value::from(45)));
//!
//! let from_zero = partial_left(builtins::range(), Arguments::single(0)).unwrap();
//! assert_eq!(from_zero.call1(3).unwrap().to_vec().unwrap().len(), 3);
//!
//! let pow = curry(builtins::pow());
//! let Value::Function(base_two) = pow.call1(2).unwrap() else { unreachable!() };
//! assert_eq!(base_two.call1(10), Ok(Value::from(1024)));
//! ```

mod applier;
mod arguments;
mod cleavage;
mod combination;
mod composition;
mod constant;
mod curry;
mod flip;
mod function;
mod logical;
mod native;
mod packing;
mod value;

pub mod builtins;

pub use applier::{Applier, ApplySide, partial_left, partial_right};
pub use arguments::Arguments;
pub use cleavage::{Cleavage, cleave};
pub use combination::{Combination, combine};
pub use composition::{Composition, compose};
pub use constant::{Constant, constant};
pub use curry::{Curry, curry};
pub use flip::{Flip, flip};
pub use function::Function;
pub use logical::{Junction, JunctionKind, Negation, conjoin, disjoin, exclusive_disjoin, negate};
pub use native::Native;
pub use packing::{Pack, pack};
pub use value::{Value, ValueIter};

pub use builtins::identity;
