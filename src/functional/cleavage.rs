//! One argument list, several functions.

use std::rc::Rc;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

/// `args ↦ (f₁(args), …, fₙ(args))`
#[derive(Debug, Clone, PartialEq)]
pub struct Cleavage {
    functions: Rc<[Function]>,
}

impl Cleavage {
    /// Functions in output order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        let results = self
            .functions
            .iter()
            .map(|function| function.call(arguments.clone()))
            .collect::<Result<Vec<Value>>>()?;
        Ok(Value::tuple(results))
    }

    pub(crate) fn signature(&self) -> Signature {
        shared_signature(&self.functions)
    }
}

/// The signature every function declares, or `(*args, **kwargs)` when
/// they differ.
pub(crate) fn shared_signature(functions: &[Function]) -> Signature {
    let mut signatures = functions.iter().map(Function::signature);
    match signatures.next() {
        Some(first) if signatures.all(|other| other == first) => first,
        _ => Signature::variadic(),
    }
}

/// Calls every function with the same arguments and returns the results as
/// a tuple, in order.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins, cleave};
///
/// let bounds = cleave([builtins::min(), builtins::max()]);
/// let numbers = Value::list([3, 1, 4, 1, 5, 9, 2, 6].map(Value::from));
/// assert_eq!(
///     bounds.call1(numbers),
///     Ok(Value::tuple([Value::from(1), Value::from(9)]))
/// );
/// ```
pub fn cleave(functions: impl IntoIterator<Item = Function>) -> Function {
    Function::Cleavage(Cleavage {
        functions: functions.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::builtins;
    use rstest::rstest;

    #[rstest]
    fn arguments_reach_every_function() {
        let pair = cleave([builtins::add(), builtins::multiply()]);
        assert_eq!(
            pair.invoke([3, 4]),
            Ok(Value::tuple([Value::from(7), Value::from(12)]))
        );
    }

    #[rstest]
    fn empty_cleave_yields_empty_tuple() {
        assert_eq!(cleave([]).invoke([1]), Ok(Value::tuple([])));
    }

    #[rstest]
    fn first_failure_surfaces() {
        let pair = cleave([builtins::len(), builtins::add()]);
        assert!(pair.call1(5).is_err());
    }

    #[rstest]
    fn shared_signature_only_when_identical() {
        let add = builtins::add();
        assert_eq!(cleave([add.clone(), builtins::multiply()]).signature(), add.signature());
        assert_eq!(cleave([add, builtins::len()]).signature(), Signature::variadic());
    }
}
