//! Signature-directed currying.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

/// A function plus the arguments collected so far.
///
/// Calling merges the new arguments into the collected ones and invokes the
/// function. When that fails with a call-shape error while the signature
/// still expects the merged arguments but is not fully bound, the call
/// returns a new curried function holding them instead.
///
/// Two curried functions are equal when they wrap equal functions with
/// equal signatures and have collected equal arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Curry {
    function: Rc<Function>,
    signature: Signature,
    arguments: Box<Arguments>,
}

impl Curry {
    /// The wrapped function.
    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Arguments collected so far.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let arguments = Arguments::clone(&self.arguments).extend(arguments);
        match self.function.call(arguments.clone()) {
            Err(error) if error.is_type_error() => {
                let positional = arguments.positional_len();
                let keywords = arguments.keyword_names();
                if !self.signature.expects(positional, &keywords)
                    || self.signature.all_set(positional, &keywords)
                {
                    return Err(error);
                }
                tracing::debug!(
                    signature = %self.signature,
                    positional,
                    keywords = keywords.len(),
                    "arguments incomplete, deferring call"
                );
                Ok(Value::Function(Function::Curried(Self {
                    function: Rc::clone(&self.function),
                    signature: self.signature.clone(),
                    arguments: Box::new(arguments),
                })))
            }
            other => other,
        }
    }

    /// Parameters still open after the collected arguments.
    pub(crate) fn signature(&self) -> Signature {
        self.signature
            .bind(self.arguments.positional_len(), &self.arguments.keyword_names())
            .unwrap_or_else(|_| self.signature.clone())
    }
}

/// Curries `function`; currying a curried function returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Function, Value, builtins, curry};
///
/// let pow = curry(builtins::pow());
/// let Value::Function(square_base) = pow.call1(2).unwrap() else {
///     panic!("expected a curried function");
/// };
/// assert!(matches!(square_base, Function::Curried(_)));
/// assert_eq!(square_base.call1(10), Ok(Value::from(1024)));
/// assert_eq!(curry(pow.clone()), pow);
/// ```
pub fn curry(function: Function) -> Function {
    match function {
        curried @ Function::Curried(_) => curried,
        other => {
            let signature = other.signature();
            Function::Curried(Curry {
                function: Rc::new(other),
                signature,
                arguments: Box::default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::functional::{builtins, constant};
    use crate::signature::PlainSignature;
    use rstest::rstest;

    fn unwrap_function(value: Value) -> Function {
        match value {
            Value::Function(function) => function,
            other => panic!("expected a function, got {other}"),
        }
    }

    #[rstest]
    fn one_argument_at_a_time() {
        let add = curry(builtins::add());
        let partial = unwrap_function(add.call1(2).unwrap());
        assert_eq!(partial.call1(3), Ok(Value::from(5)));
        assert_eq!(partial.signature().to_string(), "(right, /)");
    }

    #[rstest]
    fn surplus_arguments_surface_the_error() {
        let add = curry(builtins::add());
        assert_eq!(
            add.invoke([1, 2, 3]),
            Err(Error::TooManyPositional { expected: 2, given: 3 })
        );
    }

    #[rstest]
    fn complete_calls_surface_body_errors() {
        let add = curry(builtins::add());
        assert!(matches!(
            add.call(Arguments::new().with(1).with("x")),
            Err(Error::WrongType { .. })
        ));
    }

    #[rstest]
    fn non_type_errors_are_never_deferred() {
        let signature = PlainSignature::builder()
            .positional_only("x")
            .positional_only("y")
            .build()
            .unwrap();
        let failing = Function::native("failing", signature, |_| Err(Error::EmptySequence));
        let deferred = unwrap_function(curry(failing).call1(1).unwrap());
        assert_eq!(deferred.call1(2), Err(Error::EmptySequence));
    }

    #[rstest]
    fn keywords_accumulate_and_later_wins() {
        let sum = curry(builtins::sum());
        let with_start = unwrap_function(sum.call(Arguments::new().with_keyword("start", 1)).unwrap());
        let arguments = Arguments::single(Value::list([Value::from(2)])).with_keyword("start", 10);
        assert_eq!(with_start.call(arguments), Ok(Value::from(12)));
    }

    #[rstest]
    fn curry_is_idempotent() {
        let pow = curry(builtins::pow());
        assert_eq!(curry(pow.clone()), pow);
        let bound = unwrap_function(pow.call1(2).unwrap());
        assert_eq!(curry(bound.clone()), bound);
    }

    #[rstest]
    fn variadic_functions_run_immediately() {
        let answer = curry(constant(1));
        assert_eq!(answer.invoke::<Value>([]), Ok(Value::from(1)));
    }
}
