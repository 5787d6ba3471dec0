//! Right-to-left function composition.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::signature::Signature;
use crate::{Error, Result};

/// `x ↦ f₁(f₂(…fₙ(x…)))`, with `n >= 2`.
///
/// Nested compositions are flattened on construction, so the stored list
/// never contains a composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    functions: Rc<[Function]>,
}

impl Composition {
    /// Functions, outermost first.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let Some((innermost, outer)) = self.functions.split_last() else {
            return Ok(Value::Nil);
        };
        outer
            .iter()
            .rev()
            .try_fold(innermost.call(arguments)?, |value, function| function.call1(value))
    }

    /// The innermost function's signature.
    pub(crate) fn signature(&self) -> Signature {
        self.functions
            .last()
            .map_or_else(Signature::variadic, Function::signature)
    }
}

/// Composes `functions`, outermost first.
///
/// The innermost function receives the call's arguments; each outer layer
/// receives the previous result as its single positional argument.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when fewer than two functions remain after
/// flattening nested compositions.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins, compose};
///
/// let total = compose([builtins::sum(), builtins::range()]).unwrap();
/// assert_eq!(total.call1(10), Ok(Value::from(45)));
/// ```
pub fn compose(functions: impl IntoIterator<Item = Function>) -> Result<Function> {
    let mut flattened = Vec::new();
    for function in functions {
        match function {
            Function::Composition(inner) => flattened.extend(inner.functions.iter().cloned()),
            other => flattened.push(other),
        }
    }
    if flattened.len() < 2 {
        return Err(Error::invalid_argument(
            "functions",
            format!("composition needs at least two functions, got {}", flattened.len()),
        ));
    }
    Ok(Function::Composition(Composition {
        functions: flattened.into(),
    }))
}
