//! Ready-made native functions.
//!
//! Each constructor returns a fresh [`Function`]; clones of one result are
//! equal to each other, separately constructed ones are not.

use std::cmp::Ordering;

use super::arguments::Arguments;
use super::function::Function;
use super::value::Value;
use crate::signature::{OverloadedSignature, Parameter, PlainSignature, Signature};
use crate::{Error, Result};

fn plain(parameters: impl IntoIterator<Item = Parameter>) -> PlainSignature {
    PlainSignature::new(parameters).unwrap_or_default()
}

fn overloaded(alternatives: impl IntoIterator<Item = PlainSignature>) -> Signature {
    OverloadedSignature::new(alternatives).unwrap_or_default()
}

/// `(value, /)`
fn unary() -> PlainSignature {
    plain([Parameter::positional_only("value")])
}

/// `(left, right, /)`
fn binary() -> PlainSignature {
    plain([
        Parameter::positional_only("left"),
        Parameter::positional_only("right"),
    ])
}

fn overflow() -> Error {
    Error::invalid_argument("value", "integer overflow")
}

const fn is_integral(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Bool(_))
}

const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Bool(_) | Value::Float(_))
}

fn not_numbers(left: &Value, right: &Value) -> Error {
    Error::WrongType {
        expected: "numbers",
        found: if is_number(left) { right.type_name() } else { left.type_name() },
    }
}

/// Integer arithmetic when both sides are integral, float arithmetic when
/// both are numbers.
fn arithmetic(
    left: &Value,
    right: &Value,
    integral: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Value> {
    if is_integral(left) && is_integral(right) {
        integral(left.as_int()?, right.as_int()?)
            .map(Value::Int)
            .ok_or_else(overflow)
    } else if is_number(left) && is_number(right) {
        Ok(Value::Float(float(left.as_float()?, right.as_float()?)))
    } else {
        Err(not_numbers(left, right))
    }
}

/// `left + right` for numbers, text, tuples and lists.
fn add_values(left: &Value, right: &Value) -> Result<Value> {
    match (left, right) {
        (Value::Str(first), Value::Str(second)) => Ok(Value::str(format!("{first}{second}"))),
        (Value::Tuple(first), Value::Tuple(second)) => {
            Ok(Value::tuple(first.iter().chain(second.iter()).cloned()))
        }
        (Value::List(first), Value::List(second)) => {
            let joined: Vec<Value> = first.borrow().iter().chain(second.borrow().iter()).cloned().collect();
            Ok(Value::list(joined))
        }
        _ => arithmetic(left, right, i64::checked_add, |a, b| a + b),
    }
}

/// `(value, /)`: returns its argument.
pub fn identity() -> Function {
    Function::native("identity", unary(), |arguments: Arguments| {
        arguments.require(0, "value").cloned()
    })
}

/// `(left, right, /)`: `left + right`.
pub fn add() -> Function {
    Function::native("add", binary(), |arguments: Arguments| {
        add_values(arguments.require(0, "left")?, arguments.require(1, "right")?)
    })
}

/// `(left, right, /)`: `left - right`.
pub fn subtract() -> Function {
    Function::native("subtract", binary(), |arguments: Arguments| {
        arithmetic(
            arguments.require(0, "left")?,
            arguments.require(1, "right")?,
            i64::checked_sub,
            |a, b| a - b,
        )
    })
}

/// `(left, right, /)`: `left * right`.
pub fn multiply() -> Function {
    Function::native("multiply", binary(), |arguments: Arguments| {
        arithmetic(
            arguments.require(0, "left")?,
            arguments.require(1, "right")?,
            i64::checked_mul,
            |a, b| a * b,
        )
    })
}

/// `(value, /)`: whether an integer is even.
pub fn is_even() -> Function {
    Function::native("is_even", unary(), |arguments: Arguments| {
        Ok(Value::Bool(arguments.require(0, "value")?.as_int()? % 2 == 0))
    })
}

/// `(value, /)`: number of elements.
pub fn len() -> Function {
    Function::native("len", unary(), |arguments: Arguments| {
        let length = arguments.require(0, "value")?.len()?;
        i64::try_from(length).map(Value::Int).map_err(|_| overflow())
    })
}

/// `(iterable, /, start=0)`: `start` plus every element.
pub fn sum() -> Function {
    let signature = plain([
        Parameter::positional_only("iterable"),
        Parameter::positional_or_keyword("start").with_default(),
    ]);
    Function::native("sum", signature, |arguments: Arguments| {
        let start = arguments.get(1, "start").cloned().unwrap_or(Value::Int(0));
        arguments
            .require(0, "iterable")?
            .iter_values()?
            .try_fold(start, |total, element| add_values(&total, &element))
    })
}

/// `(stop, /) | (start, stop, step=1, /)`: a lazy arithmetic progression.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Value, builtins};
///
/// let down = builtins::range().invoke([5, 0, -2]).unwrap();
/// assert_eq!(down.to_vec().unwrap(), [5, 3, 1].map(Value::from));
/// ```
pub fn range() -> Function {
    let signature = overloaded([
        plain([Parameter::positional_only("stop")]),
        plain([
            Parameter::positional_only("start"),
            Parameter::positional_only("stop"),
            Parameter::positional_only("step").with_default(),
        ]),
    ]);
    Function::native("range", signature, |arguments: Arguments| {
        let bounds = arguments.positional();
        let (start, stop, step) = match bounds {
            [stop] => (0, stop.as_int()?, 1),
            [start, stop] => (start.as_int()?, stop.as_int()?, 1),
            [start, stop, Value::Nil] => (start.as_int()?, stop.as_int()?, 1),
            [start, stop, step, ..] => (start.as_int()?, stop.as_int()?, step.as_int()?),
            [] => return Err(Error::MissingArguments(vec!["stop".to_owned()])),
        };
        if step == 0 {
            return Err(Error::invalid_argument("step", "range step must not be zero"));
        }
        let mut current = start;
        Ok(Value::iterator(std::iter::from_fn(move || {
            let inside = if step > 0 { current < stop } else { current > stop };
            inside.then(|| {
                let value = current;
                current = current.saturating_add(step);
                Value::Int(value)
            })
        })))
    })
}

fn modular_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64> {
    if modulus == 0 {
        return Err(Error::invalid_argument("mod", "modulus must not be zero"));
    }
    if exponent < 0 {
        return Err(Error::invalid_argument("exp", "negative exponent with a modulus"));
    }
    let magnitude = i128::from(modulus).abs();
    let mut result: i128 = 1 % magnitude;
    let mut factor = i128::from(base).rem_euclid(magnitude);
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * factor % magnitude;
        }
        factor = factor * factor % magnitude;
        remaining >>= 1;
    }
    if modulus < 0 && result != 0 {
        result += i128::from(modulus);
    }
    i64::try_from(result).map_err(|_| overflow())
}

/// `(base, exp, mod=None, /)`: exponentiation, modular when `mod` is given.
pub fn pow() -> Function {
    let signature = plain([
        Parameter::positional_only("base"),
        Parameter::positional_only("exp"),
        Parameter::positional_only("mod").with_default(),
    ]);
    Function::native("pow", signature, |arguments: Arguments| {
        let base = arguments.require(0, "base")?;
        let exponent = arguments.require(1, "exp")?;
        match arguments.get(2, "mod") {
            Some(modulus) if !matches!(modulus, Value::Nil) => {
                modular_pow(base.as_int()?, exponent.as_int()?, modulus.as_int()?).map(Value::Int)
            }
            _ if is_integral(base) && is_integral(exponent) && exponent.as_int()? >= 0 => {
                let exponent = u32::try_from(exponent.as_int()?).map_err(|_| overflow())?;
                base.as_int()?
                    .checked_pow(exponent)
                    .map(Value::Int)
                    .ok_or_else(overflow)
            }
            _ if is_number(base) && is_number(exponent) => {
                Ok(Value::Float(base.as_float()?.powf(exponent.as_float()?)))
            }
            _ => Err(not_numbers(base, exponent)),
        }
    })
}

/// `(iterable, /, *, key=None) | (first, second, /, *args, key=None)`
fn extremum_signature() -> Signature {
    overloaded([
        plain([
            Parameter::positional_only("iterable"),
            Parameter::keyword_only("key").with_default(),
        ]),
        plain([
            Parameter::positional_only("first"),
            Parameter::positional_only("second"),
            Parameter::variadic_positional("args"),
            Parameter::keyword_only("key").with_default(),
        ]),
    ])
}

/// First element whose key is not beaten under `wanted`.
fn extremum(arguments: &Arguments, wanted: Ordering) -> Result<Value> {
    let candidates: Vec<Value> = match arguments.positional() {
        [iterable] => iterable.to_vec()?,
        many => many.to_vec(),
    };
    let key = match arguments.keyword("key") {
        Some(Value::Nil) | None => None,
        Some(function) => Some(function.as_function()?),
    };
    let keyed = |value: &Value| match key {
        Some(function) => function.call1(value.clone()),
        None => Ok(value.clone()),
    };

    let mut candidates = candidates.into_iter();
    let first = candidates.next().ok_or(Error::EmptySequence)?;
    let mut best_key = keyed(&first)?;
    let mut best = first;
    for candidate in candidates {
        let candidate_key = keyed(&candidate)?;
        let ordering = candidate_key.partial_cmp(&best_key).ok_or(Error::WrongType {
            expected: "comparable values",
            found: candidate_key.type_name(),
        })?;
        if ordering == wanted {
            best = candidate;
            best_key = candidate_key;
        }
    }
    Ok(best)
}

/// Smallest element (first of equals), optionally by `key`.
pub fn min() -> Function {
    Function::native("min", extremum_signature(), |arguments: Arguments| {
        extremum(&arguments, Ordering::Less)
    })
}

/// Largest element (first of equals), optionally by `key`.
pub fn max() -> Function {
    Function::native("max", extremum_signature(), |arguments: Arguments| {
        extremum(&arguments, Ordering::Greater)
    })
}
