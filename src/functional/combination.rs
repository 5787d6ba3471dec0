//! Parallel maps over the elements of one iterable.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::{PlainSignature, Signature};

/// `(x₁, …, xₘ) ↦ (f₁(x₁), …, fₖ(xₖ))` with `k = min(n, m)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    functions: Rc<[Function]>,
}

impl Combination {
    /// Maps in positional order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let iterable = arguments.require(0, "iterable")?;
        let results = self
            .functions
            .iter()
            .zip(iterable.iter_values()?)
            .map(|(function, element)| function.call1(element))
            .collect::<Result<Vec<Value>>>()?;
        Ok(Value::tuple(results))
    }

    /// `(iterable, /)`
    pub(crate) fn signature() -> Signature {
        Signature::Plain(PlainSignature::builder().positional_only("iterable").build().unwrap_or_default())
    }
}

/// Applies the i-th function to the i-th element of a single iterable
/// argument; the result is as long as the shorter of the two.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins, combine};
///
/// let both = combine([builtins::len(), builtins::is_even()]);
/// let input = Value::tuple([Value::from("abc"), Value::from(4), Value::from(5)]);
/// assert_eq!(both.call1(input), Ok(Value::tuple([Value::from(3), Value::from(true)])));
/// ```
pub fn combine(functions: impl IntoIterator<Item = Function>) -> Function {
    Function::Combination(Combination {
        functions: functions.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::functional::builtins;
    use rstest::rstest;

    #[rstest]
    fn shorter_input_truncates() {
        let triple = combine([builtins::identity(), builtins::identity(), builtins::identity()]);
        let input = Value::list([Value::from(1)]);
        assert_eq!(triple.call1(input), Ok(Value::tuple([Value::from(1)])));
    }

    #[rstest]
    fn consumes_lazy_input() {
        let pair = combine([builtins::is_even(), builtins::is_even()]);
        let input = Value::iterator((1..).map(Value::from));
        assert_eq!(
            pair.call1(input),
            Ok(Value::tuple([Value::from(false), Value::from(true)]))
        );
    }

    #[rstest]
    fn non_iterable_is_rejected() {
        let single = combine([builtins::identity()]);
        assert_eq!(
            single.call1(1),
            Err(Error::WrongType { expected: "iterable", found: "int" })
        );
        assert!(single.call(Arguments::new()).is_err());
    }

    #[rstest]
    fn signature_takes_one_iterable() {
        assert_eq!(Combination::signature().to_string(), "(iterable, /)");
    }
}
