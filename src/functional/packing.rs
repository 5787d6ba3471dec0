//! Spreading one iterable argument into positionals.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::{PlainSignature, Signature};

/// Calls the wrapped function with the elements of its single positional
/// argument as positionals, forwarding keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    function: Rc<Function>,
}

impl Pack {
    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let iterable = arguments.require(0, "iterable")?.clone();
        let (_, keywords) = arguments.into_parts();
        let spread = keywords
            .into_iter()
            .fold(Arguments::positional_from(iterable.iter_values()?), |spread, (name, value)| {
                spread.with_keyword(name, value)
            });
        self.function.call(spread)
    }

    /// `(iterable, /, **kwargs)`
    pub(crate) fn signature() -> Signature {
        Signature::Plain(
            PlainSignature::builder()
                .positional_only("iterable")
                .variadic_keyword("kwargs")
                .build()
                .unwrap_or_default(),
        )
    }
}

/// `pack(f)(xs, **k) = f(*xs, **k)`
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins, pack};
///
/// let packed = pack(builtins::add());
/// assert_eq!(packed.call1(Value::tuple([Value::from(2), Value::from(3)])), Ok(Value::from(5)));
/// ```
pub fn pack(function: Function) -> Function {
    Function::Packed(Pack {
        function: Rc::new(function),
    })
}
