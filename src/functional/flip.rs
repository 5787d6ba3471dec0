//! Reversal of positional arguments.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

/// Calls the wrapped function with its positional arguments reversed.
#[derive(Debug, Clone, PartialEq)]
pub struct Flip {
    function: Rc<Function>,
}

impl Flip {
    /// The wrapped function.
    pub fn function(&self) -> &Function {
        &self.function
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        self.function.call(arguments.reversed())
    }

    pub(crate) fn signature(&self) -> Signature {
        self.function.signature().flipped()
    }
}

/// Reverses positional arguments before calling `function`; keywords pass
/// through untouched. Flipping a flipped function returns the original.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins, flip};
///
/// let pow = builtins::pow();
/// assert_eq!(flip(pow.clone()).invoke([2, 4]), Ok(Value::from(16)));
/// assert_eq!(flip(flip(pow.clone())), pow);
/// ```
pub fn flip(function: Function) -> Function {
    match function {
        Function::Flipped(flip) => Rc::unwrap_or_clone(flip.function),
        other => Function::Flipped(Flip {
            function: Rc::new(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::builtins;
    use rstest::rstest;

    #[rstest]
    fn keywords_are_untouched() {
        let flipped = flip(builtins::sum());
        let arguments = Arguments::new()
            .with(Value::list([Value::from(1), Value::from(2)]))
            .with_keyword("start", 10);
        assert_eq!(flipped.call(arguments), Ok(Value::from(13)));
    }

    #[rstest]
    fn signature_is_reversed() {
        assert_eq!(flip(builtins::add()).signature().to_string(), "(right, left, /)");
    }
}
