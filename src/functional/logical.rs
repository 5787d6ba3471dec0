//! Boolean combinators over predicates.

use std::rc::Rc;

use super::arguments::Arguments;
use super::cleavage::shared_signature;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

/// `args ↦ not truthy(p(args))`
#[derive(Debug, Clone, PartialEq)]
pub struct Negation {
    predicate: Rc<Function>,
}

impl Negation {
    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        Ok(Value::Bool(!self.predicate.call(arguments)?.truthy()))
    }

    pub(crate) fn signature(&self) -> Signature {
        self.predicate.signature()
    }
}

/// How a [`Junction`] combines its predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunctionKind {
    /// Every predicate holds; stops at the first that does not.
    All,
    /// Some predicate holds; stops at the first that does.
    Any,
    /// Exactly one predicate holds; evaluates all of them.
    ExactlyOne,
}

/// Several predicates sharing one argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    kind: JunctionKind,
    predicates: Rc<[Function]>,
}

impl Junction {
    /// The combining rule.
    pub const fn kind(&self) -> JunctionKind {
        self.kind
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let outcomes = self
            .predicates
            .iter()
            .map(|predicate| predicate.call(arguments.clone()).map(|value| value.truthy()));
        let result = match self.kind {
            JunctionKind::All => {
                let mut all = true;
                for outcome in outcomes {
                    if !outcome? {
                        all = false;
                        break;
                    }
                }
                all
            }
            JunctionKind::Any => {
                let mut any = false;
                for outcome in outcomes {
                    if outcome? {
                        any = true;
                        break;
                    }
                }
                any
            }
            JunctionKind::ExactlyOne => {
                let mut holding = 0_usize;
                for outcome in outcomes {
                    holding += usize::from(outcome?);
                }
                holding == 1
            }
        };
        Ok(Value::Bool(result))
    }

    pub(crate) fn signature(&self) -> Signature {
        shared_signature(&self.predicates)
    }
}

/// Boolean negation of `predicate`'s truthiness.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins, negate};
///
/// let is_odd = negate(builtins::is_even());
/// assert_eq!(is_odd.call1(3), Ok(Value::from(true)));
/// ```
pub fn negate(predicate: Function) -> Function {
    Function::Negated(Negation {
        predicate: Rc::new(predicate),
    })
}

fn junction(kind: JunctionKind, predicates: impl IntoIterator<Item = Function>) -> Function {
    Function::Junction(Junction {
        kind,
        predicates: predicates.into_iter().collect(),
    })
}

/// `true` when every predicate holds; `true` for no predicates.
pub fn conjoin(predicates: impl IntoIterator<Item = Function>) -> Function {
    junction(JunctionKind::All, predicates)
}

/// `true` when some predicate holds; `false` for no predicates.
pub fn disjoin(predicates: impl IntoIterator<Item = Function>) -> Function {
    junction(JunctionKind::Any, predicates)
}

/// `true` when exactly one predicate holds.
pub fn exclusive_disjoin(predicates: impl IntoIterator<Item = Function>) -> Function {
    junction(JunctionKind::ExactlyOne, predicates)
}
