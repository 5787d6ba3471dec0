//! Dynamically typed values passed through the function algebra.

use std::any::Any;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::function::Function;
use crate::{Error, Result};

/// A shared, single-pass iterator of values.
///
/// Clones share the same underlying iterator: pulling through one clone
/// advances all of them, the way a reference to one iterator object would.
#[derive(Clone)]
pub struct ValueIter(Rc<RefCell<Box<dyn Iterator<Item = Value>>>>);

impl ValueIter {
    /// Wraps `iterator`.
    pub fn new<I>(iterator: I) -> Self
    where
        I: Iterator<Item = Value> + 'static,
    {
        Self(Rc::new(RefCell::new(Box::new(iterator))))
    }

    /// Whether both handles share one iterator.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Iterator for ValueIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.0.borrow_mut().next()
    }
}

impl fmt::Debug for ValueIter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ValueIter(..)")
    }
}

/// A dynamically typed value.
///
/// Atoms and tuples are immutable. `ByteArray`, `List`, `Set` and `Map` are
/// shared mutable containers: cloning a `Value` clones the handle, not the
/// contents, so a mutation is visible through every clone. Use
/// [`replicate`](crate::replication::replicate) for independent copies.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::Value;
///
/// let list = Value::list([Value::from(1), Value::from(2)]);
/// let alias = list.clone();
/// if let Value::List(items) = &alias {
///     items.borrow_mut().push(Value::from(3));
/// }
/// assert_eq!(list.len(), Ok(3));
/// assert_eq!(Value::from(2), Value::from(2.0));
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// Immutable text.
    Str(Rc<str>),
    /// Immutable bytes.
    Bytes(Rc<[u8]>),
    /// Immutable fixed-length sequence.
    Tuple(Rc<[Value]>),
    /// Mutable bytes.
    ByteArray(Rc<RefCell<Vec<u8>>>),
    /// Mutable sequence.
    List(Rc<RefCell<Vec<Value>>>),
    /// Mutable collection of distinct values, in insertion order.
    Set(Rc<RefCell<Vec<Value>>>),
    /// Mutable key-value pairs with distinct keys, in insertion order.
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
    /// A lazy sequence of values.
    Iterator(ValueIter),
    /// A callable.
    Function(Function),
    /// A host payload the library can pass around but not inspect.
    Opaque(Rc<dyn Any>),
}

impl Value {
    /// Text value.
    pub fn str(text: impl AsRef<str>) -> Self {
        Self::Str(Rc::from(text.as_ref()))
    }

    /// Immutable byte value.
    pub fn bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Rc::from(bytes.as_ref()))
    }

    /// Tuple of `items`.
    pub fn tuple(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(items.into_iter().collect())
    }

    /// Mutable byte array holding `bytes`.
    pub fn byte_array(bytes: impl Into<Vec<u8>>) -> Self {
        Self::ByteArray(Rc::new(RefCell::new(bytes.into())))
    }

    /// List of `items`.
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Set of `items`; later duplicates are dropped.
    pub fn set(items: impl IntoIterator<Item = Self>) -> Self {
        let mut distinct: Vec<Self> = Vec::new();
        for item in items {
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Self::Set(Rc::new(RefCell::new(distinct)))
    }

    /// Map of `pairs`; a repeated key keeps its first position and its last value.
    pub fn map(pairs: impl IntoIterator<Item = (Self, Self)>) -> Self {
        let mut entries: Vec<(Self, Self)> = Vec::new();
        for (key, value) in pairs {
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self::Map(Rc::new(RefCell::new(entries)))
    }

    /// Lazy sequence drawing from `iterator`.
    pub fn iterator<I>(iterator: I) -> Self
    where
        I: Iterator<Item = Self> + 'static,
    {
        Self::Iterator(ValueIter::new(iterator))
    }

    /// Opaque host payload.
    pub fn opaque<T: Any>(payload: T) -> Self {
        Self::Opaque(Rc::new(payload))
    }

    /// Short name of the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::Tuple(_) => "tuple",
            Self::ByteArray(_) => "bytearray",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Iterator(_) => "iterator",
            Self::Function(_) => "function",
            Self::Opaque(_) => "opaque",
        }
    }

    const fn wrong_type(&self, expected: &'static str) -> Error {
        Error::WrongType {
            expected,
            found: self.type_name(),
        }
    }

    /// Whether the value is a shared mutable container.
    pub const fn is_mutable(&self) -> bool {
        matches!(
            self,
            Self::ByteArray(_) | Self::List(_) | Self::Set(_) | Self::Map(_)
        )
    }

    /// Truthiness: `Nil`, `false`, zero and empty containers are false.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::Str(text) => !text.is_empty(),
            Self::Bytes(bytes) => !bytes.is_empty(),
            Self::Tuple(items) => !items.is_empty(),
            Self::ByteArray(bytes) => !bytes.borrow().is_empty(),
            Self::List(items) | Self::Set(items) => !items.borrow().is_empty(),
            Self::Map(entries) => !entries.borrow().is_empty(),
            Self::Iterator(_) | Self::Function(_) | Self::Opaque(_) => true,
        }
    }

    /// The integer inside `Int` (or `Bool`).
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for other variants.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(number) => Ok(*number),
            Self::Bool(flag) => Ok(i64::from(*flag)),
            other => Err(other.wrong_type("int")),
        }
    }

    /// The value as a float; integers are converted.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for non-numbers.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Self::Float(number) => Ok(*number),
            Self::Int(number) => Ok(*number as f64),
            Self::Bool(flag) => Ok(f64::from(u8::from(*flag))),
            other => Err(other.wrong_type("float")),
        }
    }

    /// The text inside `Str`.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for other variants.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::Str(text) => Ok(text),
            other => Err(other.wrong_type("str")),
        }
    }

    /// The callable inside `Function`.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for other variants.
    pub fn as_function(&self) -> Result<&Function> {
        match self {
            Self::Function(function) => Ok(function),
            other => Err(other.wrong_type("function")),
        }
    }

    /// Number of elements.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for values without a length.
    pub fn len(&self) -> Result<usize> {
        match self {
            Self::Str(text) => Ok(text.chars().count()),
            Self::Bytes(bytes) => Ok(bytes.len()),
            Self::Tuple(items) => Ok(items.len()),
            Self::ByteArray(bytes) => Ok(bytes.borrow().len()),
            Self::List(items) | Self::Set(items) => Ok(items.borrow().len()),
            Self::Map(entries) => Ok(entries.borrow().len()),
            other => Err(other.wrong_type("sized value")),
        }
    }

    /// Iterates the elements: characters of text, bytes as integers, items
    /// of tuples, lists and sets, keys of maps, or the shared iterator
    /// itself.
    ///
    /// Containers are snapshotted, so mutating them while iterating is
    /// allowed and not observed.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for non-iterable values.
    pub fn iter_values(&self) -> Result<ValueIter> {
        Ok(match self {
            Self::Str(text) => {
                let characters: Vec<Self> = text
                    .chars()
                    .map(|character| Self::str(character.encode_utf8(&mut [0; 4])))
                    .collect();
                ValueIter::new(characters.into_iter())
            }
            Self::Bytes(bytes) => byte_values(bytes),
            Self::ByteArray(bytes) => byte_values(&bytes.borrow()),
            Self::Tuple(items) => ValueIter::new(items.to_vec().into_iter()),
            Self::List(items) | Self::Set(items) => ValueIter::new(items.borrow().clone().into_iter()),
            Self::Map(entries) => {
                let keys: Vec<Self> = entries.borrow().iter().map(|(key, _)| key.clone()).collect();
                ValueIter::new(keys.into_iter())
            }
            Self::Iterator(iterator) => iterator.clone(),
            other => return Err(other.wrong_type("iterable")),
        })
    }

    /// Collects [`iter_values`](Self::iter_values).
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] for non-iterable values.
    pub fn to_vec(&self) -> Result<Vec<Self>> {
        self.iter_values().map(Iterator::collect)
    }
}

fn byte_values(bytes: &[u8]) -> ValueIter {
    let values: Vec<Value> = bytes.iter().map(|byte| Value::Int(i64::from(*byte))).collect();
    ValueIter::new(values.into_iter())
}

#[allow(clippy::cast_precision_loss)]
fn numeric_eq(integer: i64, float: f64) -> bool {
    integer as f64 == float
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Int(integer), Self::Float(float)) | (Self::Float(float), Self::Int(integer)) => {
                numeric_eq(*integer, *float)
            }
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Bytes(left), Self::Bytes(right)) => left == right,
            (Self::Tuple(left), Self::Tuple(right)) => left == right,
            (Self::ByteArray(left), Self::ByteArray(right)) => {
                Rc::ptr_eq(left, right) || *left.borrow() == *right.borrow()
            }
            (Self::List(left), Self::List(right)) => Rc::ptr_eq(left, right) || *left.borrow() == *right.borrow(),
            (Self::Set(left), Self::Set(right)) => {
                if Rc::ptr_eq(left, right) {
                    return true;
                }
                let (left, right) = (left.borrow(), right.borrow());
                left.len() == right.len() && left.iter().all(|item| right.contains(item))
            }
            (Self::Map(left), Self::Map(right)) => {
                if Rc::ptr_eq(left, right) {
                    return true;
                }
                let (left, right) = (left.borrow(), right.borrow());
                left.len() == right.len() && left.iter().all(|entry| right.contains(entry))
            }
            (Self::Iterator(left), Self::Iterator(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left == right,
            (Self::Opaque(left), Self::Opaque(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left.partial_cmp(right),
            (Self::Int(left), Self::Int(right)) => left.partial_cmp(right),
            (Self::Float(left), Self::Float(right)) => left.partial_cmp(right),
            (Self::Int(left), Self::Float(right)) => (*left as f64).partial_cmp(right),
            (Self::Float(left), Self::Int(right)) => left.partial_cmp(&(*right as f64)),
            (Self::Str(left), Self::Str(right)) => left.partial_cmp(right),
            (Self::Bytes(left), Self::Bytes(right)) => left.partial_cmp(right),
            (Self::Tuple(left), Self::Tuple(right)) => left.partial_cmp(right),
            (Self::ByteArray(left), Self::ByteArray(right)) => left.borrow().partial_cmp(&*right.borrow()),
            (Self::List(left), Self::List(right)) => left.borrow().partial_cmp(&*right.borrow()),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

fn write_sequence(
    formatter: &mut fmt::Formatter<'_>,
    open: &str,
    items: &[Value],
    close: &str,
) -> fmt::Result {
    formatter.write_str(open)?;
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{item}")?;
    }
    if open == "(" && items.len() == 1 {
        formatter.write_str(",")?;
    }
    formatter.write_str(close)
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("None"),
            Self::Bool(true) => formatter.write_str("True"),
            Self::Bool(false) => formatter.write_str("False"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::Str(text) => write!(formatter, "{text:?}"),
            Self::Bytes(bytes) => write!(formatter, "b{:?}", String::from_utf8_lossy(bytes)),
            Self::ByteArray(bytes) => {
                write!(formatter, "bytearray(b{:?})", String::from_utf8_lossy(&bytes.borrow()))
            }
            Self::Tuple(items) => write_sequence(formatter, "(", items, ")"),
            Self::List(items) => write_sequence(formatter, "[", &items.borrow(), "]"),
            Self::Set(items) => write_sequence(formatter, "{", &items.borrow(), "}"),
            Self::Map(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.borrow().iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Iterator(_) => formatter.write_str("<iterator>"),
            Self::Function(function) => write!(formatter, "<function {}>", function.signature()),
            Self::Opaque(_) => formatter.write_str("<opaque>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::str(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::list(items)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, false)]
    #[case(Value::from(0), false)]
    #[case(Value::from(0.5), true)]
    #[case(Value::from(""), false)]
    #[case(Value::list([]), false)]
    #[case(Value::tuple([Value::Nil]), true)]
    #[case(Value::iterator(std::iter::empty()), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.truthy(), expected);
    }

    #[rstest]
    fn numbers_compare_across_kinds() {
        assert_eq!(Value::from(3), Value::from(3.0));
        assert!(Value::from(2) < Value::from(2.5));
        assert_eq!(Value::from("a").partial_cmp(&Value::from(1)), None);
    }

    #[rstest]
    fn sets_and_maps_ignore_order() {
        let left = Value::set([Value::from(1), Value::from(2), Value::from(1)]);
        let right = Value::set([Value::from(2), Value::from(1)]);
        assert_eq!(left, right);
        assert_eq!(left.len(), Ok(2));

        let map = Value::map([
            (Value::from("a"), Value::from(1)),
            (Value::from("a"), Value::from(2)),
        ]);
        assert_eq!(map.len(), Ok(1));
        assert_eq!(map.to_string(), "{\"a\": 2}");
    }

    #[rstest]
    fn iterator_clones_share_progress() {
        let value = Value::iterator((1..=3).map(Value::from));
        let mut first = value.iter_values().unwrap();
        let mut second = value.iter_values().unwrap();
        assert_eq!(first.next(), Some(Value::from(1)));
        assert_eq!(second.next(), Some(Value::from(2)));
    }

    #[rstest]
    fn containers_iterate_from_a_snapshot() {
        let list = Value::list([Value::from(1)]);
        let iterator = list.iter_values().unwrap();
        if let Value::List(items) = &list {
            items.borrow_mut().push(Value::from(2));
        }
        assert_eq!(iterator.count(), 1);
    }

    #[rstest]
    fn wrong_type_names_both_sides() {
        assert_eq!(
            Value::from("x").as_int(),
            Err(Error::WrongType { expected: "int", found: "str" })
        );
        assert!(Value::Nil.iter_values().is_err());
    }

    #[rstest]
    #[case(Value::tuple([Value::from(1)]), "(1,)")]
    #[case(Value::list([Value::from(true), Value::Nil]), "[True, None]")]
    #[case(Value::bytes(b"ab"), "b\"ab\"")]
    #[case(Value::from(1.0), "1.0")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
