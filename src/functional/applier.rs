//! Partial application from either end.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

/// Which end of the caller's positional arguments the stored ones go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplySide {
    /// Stored positionals come first.
    Left,
    /// Stored positionals come last.
    Right,
}

/// A function with some arguments already supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Applier {
    function: Rc<Function>,
    side: ApplySide,
    stored: Box<Arguments>,
    signature: Signature,
}

impl Applier {
    /// The wrapped function.
    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Where stored positionals are placed.
    pub const fn side(&self) -> ApplySide {
        self.side
    }

    /// The stored arguments.
    pub fn stored(&self) -> &Arguments {
        &self.stored
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let arguments = match self.side {
            ApplySide::Left => arguments.prepended(&self.stored),
            ApplySide::Right => arguments.appended(&self.stored),
        };
        self.function.call(arguments)
    }

    /// Residual signature computed at construction.
    pub(crate) const fn signature(&self) -> &Signature {
        &self.signature
    }
}

fn apply(function: Function, side: ApplySide, stored: Arguments) -> Result<Function> {
    let (function, stored) = match function {
        Function::Applier(inner) if inner.side == side => {
            let combined = match side {
                ApplySide::Left => (*inner.stored).extend(stored),
                ApplySide::Right => stored.appended(&inner.stored),
            };
            (inner.function, combined)
        }
        other => (Rc::new(other), stored),
    };
    let target = function.signature();
    let keywords = stored.keyword_names();
    let signature = match side {
        ApplySide::Left => target.bind(stored.positional_len(), &keywords)?,
        ApplySide::Right => target
            .bind_right(stored.positional_len())?
            .bind_keywords(&keywords)?,
    };
    Ok(Function::Applier(Applier {
        function,
        side,
        stored: Box::new(stored),
        signature,
    }))
}

/// Fixes leading arguments: `partial_left(f, a)(b) = f(a, b)`.
///
/// Keywords from the call override stored ones. Applying twice from the
/// left collapses into one applier.
///
/// # Errors
///
/// [`Error::TooManyPositional`](crate::Error::TooManyPositional) or
/// [`Error::UnknownKeyword`](crate::Error::UnknownKeyword) when `function`
/// can never accept the stored arguments.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Arguments, Value, builtins, partial_left};
///
/// let from_zero = partial_left(builtins::range(), Arguments::single(0)).unwrap();
/// let numbers = from_zero.call1(4).unwrap().to_vec().unwrap();
/// assert_eq!(numbers, [0, 1, 2, 3].map(Value::from));
/// ```
pub fn partial_left(function: Function, stored: Arguments) -> Result<Function> {
    apply(function, ApplySide::Left, stored)
}

/// Fixes trailing arguments: `partial_right(f, a)(b) = f(b, a)`.
///
/// Applying twice from the right collapses into one applier whose newest
/// arguments come first: `partial_right(partial_right(f, a), b)(c) = f(c, b, a)`.
///
/// # Errors
///
/// As [`partial_left`].
pub fn partial_right(function: Function, stored: Arguments) -> Result<Function> {
    apply(function, ApplySide::Right, stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::functional::builtins;
    use rstest::rstest;

    #[rstest]
    fn left_then_right_positions() {
        let subtract = builtins::subtract();
        let from_ten = partial_left(subtract.clone(), Arguments::single(10)).unwrap();
        let minus_ten = partial_right(subtract, Arguments::single(10)).unwrap();
        assert_eq!(from_ten.call1(3), Ok(Value::from(7)));
        assert_eq!(minus_ten.call1(3), Ok(Value::from(-7)));
    }

    #[rstest]
    fn stored_arguments_may_hold_functions() {
        let add = builtins::add();
        let returns_add = partial_left(builtins::identity(), Arguments::single(add.clone())).unwrap();
        assert_eq!(returns_add.invoke::<Value>([]), Ok(Value::from(add)));
    }

    #[rstest]
    fn consecutive_left_collapses() {
        let once = partial_left(builtins::pow(), Arguments::single(2)).unwrap();
        let twice = partial_left(once, Arguments::single(5)).unwrap();
        let Function::Applier(applier) = &twice else {
            panic!("expected an applier");
        };
        assert_eq!(applier.stored().positional_len(), 2);
        assert_eq!(twice.invoke::<Value>([]), Ok(Value::from(32)));
        assert_eq!(twice.call1(7), Ok(Value::from(4)));
    }

    #[rstest]
    fn consecutive_right_puts_newest_first() {
        let once = partial_right(builtins::pow(), Arguments::single(7)).unwrap();
        let twice = partial_right(once, Arguments::single(5)).unwrap();
        assert_eq!(twice.call1(2), Ok(Value::from(4)));
    }

    #[rstest]
    fn validated_at_construction() {
        assert_eq!(
            partial_left(builtins::add(), [1, 2, 3].into_iter().collect()),
            Err(Error::TooManyPositional { expected: 2, given: 3 })
        );
        assert_eq!(
            partial_right(builtins::len(), Arguments::new().with_keyword("nope", 1)),
            Err(Error::UnknownKeyword("nope".to_owned()))
        );
    }

    #[rstest]
    fn caller_keywords_win() {
        let summed = partial_left(builtins::sum(), Arguments::new().with_keyword("start", 100)).unwrap();
        let input = Value::list([Value::from(1)]);
        assert_eq!(summed.call1(input.clone()), Ok(Value::from(101)));
        let arguments = Arguments::single(input).with_keyword("start", 0);
        assert_eq!(summed.call(arguments), Ok(Value::from(1)));
    }

    #[rstest]
    fn residual_signature() {
        let from_zero = partial_left(builtins::range(), Arguments::single(0)).unwrap();
        assert_eq!(from_zero.signature().to_string(), "() | (stop, step=…, /)");
    }
}
