//! Positional and keyword arguments of one call.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::value::Value;
use crate::{Error, Result};

/// Positional values plus named values.
///
/// Keyword order is irrelevant; merging two argument lists lets the later
/// list win on a repeated name.
///
/// # Examples
///
/// ```rust
/// use lazyfn::functional::{Arguments, Value};
///
/// let stored = Arguments::new().with(1).with_keyword("step", 2);
/// let call = Arguments::new().with(10).with_keyword("step", 3);
/// let merged = stored.extend(call);
/// assert_eq!(merged.positional(), &[Value::from(1), Value::from(10)]);
/// assert_eq!(merged.keyword("step"), Some(&Value::from(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: SmallVec<[Value; 4]>,
    keyword: BTreeMap<String, Value>,
}

impl Arguments {
    /// No arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional arguments only.
    pub fn positional_from(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            keyword: BTreeMap::new(),
        }
    }

    /// A single positional argument.
    pub fn single(value: impl Into<Value>) -> Self {
        Self::new().with(value)
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword argument, replacing an earlier one of the same name.
    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Positional arguments in order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Number of positional arguments.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Keyword arguments.
    pub const fn keywords(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Keyword names, sorted.
    pub fn keyword_names(&self) -> Vec<&str> {
        self.keyword.keys().map(String::as_str).collect()
    }

    /// The keyword argument `name`.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Whether there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Positional argument `index`, or else keyword `name`.
    pub fn get(&self, index: usize, name: &str) -> Option<&Value> {
        self.positional.get(index).or_else(|| self.keyword.get(name))
    }

    /// Like [`get`](Self::get) but required.
    ///
    /// # Errors
    ///
    /// [`Error::MissingArguments`] naming `name`.
    pub fn require(&self, index: usize, name: &str) -> Result<&Value> {
        self.get(index, name)
            .ok_or_else(|| Error::MissingArguments(vec![name.to_owned()]))
    }

    /// Splits into positional and keyword parts.
    pub fn into_parts(self) -> (SmallVec<[Value; 4]>, BTreeMap<String, Value>) {
        (self.positional, self.keyword)
    }

    /// `self` followed by `later`; `later` wins on repeated keywords.
    #[must_use]
    pub fn extend(mut self, later: Self) -> Self {
        self.positional.extend(later.positional);
        self.keyword.extend(later.keyword);
        self
    }

    /// `stored` positionals before the caller's; caller keywords win.
    #[must_use]
    pub fn prepended(self, stored: &Self) -> Self {
        stored.clone().extend(self)
    }

    /// `stored` positionals after the caller's; caller keywords win.
    #[must_use]
    pub fn appended(mut self, stored: &Self) -> Self {
        self.positional.extend(stored.positional.iter().cloned());
        for (name, value) in &stored.keyword {
            self.keyword.entry(name.clone()).or_insert_with(|| value.clone());
        }
        self
    }

    /// Positional arguments in reverse order; keywords untouched.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.positional.reverse();
        self
    }
}

impl<V: Into<Value>> FromIterator<V> for Arguments {
    fn from_iter<T: IntoIterator<Item = V>>(iterator: T) -> Self {
        Self::positional_from(iterator.into_iter().map(Into::into))
    }
}
