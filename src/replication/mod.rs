//! Independent copies of values.
//!
//! [`replicate`] dispatches on the kind of value:
//!
//! - atoms (`Nil`, numbers, text, bytes) and functions are immutable, so the
//!   same value is repeated;
//! - mutable containers (`ByteArray`, `List`, `Set`, `Map`) are deep-copied,
//!   elements included, so mutating one replica is never visible through
//!   another or through the original;
//! - tuples are rebuilt from replicated elements;
//! - iterators are teed, and every element is replicated when a consumer
//!   pulls it.
//!
//! Host payloads (`Opaque`) cannot be copied and are rejected.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::functional::Value;
//! use lazyfn::replication::replicate;
//!
//! let original = Value::list([Value::list([Value::from(1)])]);
//! let copies = replicate(&original, 2).unwrap();
//! if let Value::List(items) = &copies[0] {
//!     if let Value::List(inner) = &items.borrow()[0] {
//!         inner.borrow_mut().push(Value::from(2));
//!     }
//! }
//! assert_eq!(copies[1], original);
//! assert_ne!(copies[0], original);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::functional::Value;
use crate::iterating::{Tee, tee, tee_with};
use crate::{Error, Result};

/// `count` independent replicas of `value`.
///
/// An iterator is consumed by its replicas: once replicated, pull only
/// through the returned values, not through the original handle.
///
/// # Errors
///
/// [`Error::UnsupportedType`] for opaque payloads, and for iterators or
/// opaque payloads nested inside a container or tuple.
pub fn replicate(value: &Value, count: usize) -> Result<Vec<Value>> {
    match value {
        Value::Opaque(_) => Err(Error::UnsupportedType("opaque")),
        Value::Iterator(iterator) => Ok(tee_with(iterator.clone(), count, replicate_or_share)
            .into_iter()
            .map(Value::iterator)
            .collect()),
        other => (0..count).map(|_| deep_copy(other)).collect(),
    }
}

/// Two replicas of `value`.
///
/// # Errors
///
/// As [`replicate`].
pub fn duplicate(value: &Value) -> Result<(Value, Value)> {
    let mut replicas = replicate(value, 2)?.into_iter();
    match (replicas.next(), replicas.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(Error::UnsupportedType(value.type_name())),
    }
}

/// Typed counterpart of [`replicate`] for iterators of cloneable items.
pub fn replicate_iter<I>(iterable: I, count: usize) -> Vec<Tee<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    tee(iterable, count)
}

/// Element duplication for teed iterators. Pull time cannot fail, so
/// elements that cannot be replicated are shared instead.
fn replicate_or_share(element: Value, count: usize) -> Vec<Value> {
    replicate(&element, count).unwrap_or_else(|_| vec![element; count])
}

fn deep_copy(value: &Value) -> Result<Value> {
    Ok(match value {
        Value::Nil
        | Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::Str(_)
        | Value::Bytes(_)
        | Value::Function(_) => value.clone(),
        Value::Tuple(items) => Value::Tuple(copy_all(items.iter())?.into()),
        Value::ByteArray(bytes) => Value::ByteArray(Rc::new(RefCell::new(bytes.borrow().clone()))),
        Value::List(items) => Value::List(shared(copy_all(items.borrow().iter())?)),
        Value::Set(items) => Value::Set(shared(copy_all(items.borrow().iter())?)),
        Value::Map(entries) => {
            let copied = entries
                .borrow()
                .iter()
                .map(|(key, value)| Ok((deep_copy(key)?, deep_copy(value)?)))
                .collect::<Result<Vec<_>>>()?;
            Value::Map(shared(copied))
        }
        Value::Iterator(_) => return Err(Error::UnsupportedType("iterator inside a container")),
        Value::Opaque(_) => return Err(Error::UnsupportedType("opaque")),
    })
}

fn copy_all<'a>(items: impl Iterator<Item = &'a Value>) -> Result<Vec<Value>> {
    items.map(deep_copy).collect()
}

fn shared<T>(contents: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(contents))
}
