//! Functions that ignore their arguments.

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;

/// Always returns the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    value: Box<Value>,
}

impl Constant {
    /// The returned value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn call(&self, _arguments: Arguments) -> Value {
        Value::clone(&self.value)
    }
}

/// A function accepting any arguments and returning `value`.
///
/// Two constants are equal when their values are.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Arguments, Value, constant};
///
/// let answer = constant(42);
/// assert_eq!(answer.invoke([1, 2, 3]), Ok(Value::from(42)));
/// assert_eq!(answer.call(Arguments::new().with_keyword("x", 0)), Ok(Value::from(42)));
/// assert_eq!(answer, constant(42));
/// ```
pub fn constant(value: impl Into<Value>) -> Function {
    Function::Constant(Constant {
        value: Box::new(value.into()),
    })
}
