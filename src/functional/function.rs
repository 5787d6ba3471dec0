//! The callable value and its dispatch.

use std::fmt;

use super::applier::Applier;
use super::arguments::Arguments;
use super::cleavage::Cleavage;
use super::combination::Combination;
use super::composition::Composition;
use super::constant::Constant;
use super::curry::Curry;
use super::flip::Flip;
use super::logical::{Junction, Negation};
use super::native::Native;
use super::packing::Pack;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

/// Any callable of the function algebra.
///
/// Every variant is immutable; calling never changes the function. Variants
/// other than [`Native`] are built by the combinators in
/// [`functional`](crate::functional) and wrap other functions.
#[derive(Clone, PartialEq)]
pub enum Function {
    /// A host closure with a declared signature.
    Native(Native),
    /// `compose(f, g, …)`
    Composition(Composition),
    /// `cleave(f, g, …)`
    Cleavage(Cleavage),
    /// `combine(f, g, …)`
    Combination(Combination),
    /// `constant(v)`
    Constant(Constant),
    /// `flip(f)`
    Flipped(Flip),
    /// `partial_left(f, …)` or `partial_right(f, …)`
    Applier(Applier),
    /// `curry(f)`, possibly with arguments already bound
    Curried(Curry),
    /// `negate(p)`
    Negated(Negation),
    /// `conjoin`, `disjoin` or `exclusive_disjoin` of predicates
    Junction(Junction),
    /// `pack(f)`
    Packed(Pack),
}

impl Function {
    /// A native function.
    ///
    /// Calls are checked against `signature` before `body` runs, so `body`
    /// may assume every required parameter is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::functional::{Arguments, Function, Value};
    /// use lazyfn::signature::PlainSignature;
    ///
    /// let signature = PlainSignature::builder().positional_or_keyword("x").build().unwrap();
    /// let square = Function::native("square", signature, |arguments: Arguments| {
    ///     let x = arguments.require(0, "x")?.as_int()?;
    ///     Ok(Value::from(x * x))
    /// });
    /// assert_eq!(square.call1(7), Ok(Value::from(49)));
    /// assert!(square.call(Arguments::new()).is_err());
    /// ```
    pub fn native<F>(name: impl Into<String>, signature: impl Into<Signature>, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + 'static,
    {
        Self::Native(Native::new(name, signature, body))
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// Whatever the function raises; shape errors from signature checks
    /// satisfy [`Error::is_type_error`](crate::Error::is_type_error).
    pub fn call(&self, arguments: Arguments) -> Result<Value> {
        match self {
            Self::Native(native) => native.call(arguments),
            Self::Composition(composition) => composition.call(arguments),
            Self::Cleavage(cleavage) => cleavage.call(arguments),
            Self::Combination(combination) => combination.call(arguments),
            Self::Constant(constant) => Ok(constant.call(arguments)),
            Self::Flipped(flip) => flip.call(arguments),
            Self::Applier(applier) => applier.call(arguments),
            Self::Curried(curry) => curry.call(arguments),
            Self::Negated(negation) => negation.call(arguments),
            Self::Junction(junction) => junction.call(arguments),
            Self::Packed(pack) => pack.call(arguments),
        }
    }

    /// Calls with a single positional argument.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn call1(&self, argument: impl Into<Value>) -> Result<Value> {
        self.call(Arguments::single(argument))
    }

    /// Calls with positional arguments only.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn invoke<V: Into<Value>>(&self, arguments: impl IntoIterator<Item = V>) -> Result<Value> {
        self.call(arguments.into_iter().collect())
    }

    /// The parameters the function accepts.
    pub fn signature(&self) -> Signature {
        match self {
            Self::Native(native) => native.signature().clone(),
            Self::Composition(composition) => composition.signature(),
            Self::Cleavage(cleavage) => cleavage.signature(),
            Self::Combination(_) => Combination::signature(),
            Self::Constant(_) => Signature::variadic(),
            Self::Flipped(flip) => flip.signature(),
            Self::Applier(applier) => applier.signature().clone(),
            Self::Curried(curry) => curry.signature(),
            Self::Negated(negation) => negation.signature(),
            Self::Junction(junction) => junction.signature(),
            Self::Packed(_) => Pack::signature(),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Native(native) => return write!(formatter, "Native({}{})", native.name(), native.signature()),
            Self::Composition(_) => "Composition",
            Self::Cleavage(_) => "Cleavage",
            Self::Combination(_) => "Combination",
            Self::Constant(_) => "Constant",
            Self::Flipped(_) => "Flipped",
            Self::Applier(_) => "Applier",
            Self::Curried(_) => "Curried",
            Self::Negated(_) => "Negated",
            Self::Junction(_) => "Junction",
            Self::Packed(_) => "Packed",
        };
        write!(formatter, "{kind}{}", self.signature())
    }
}
