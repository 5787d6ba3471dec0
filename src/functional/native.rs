//! Host closures with a declared signature.

use std::fmt;
use std::rc::Rc;

use super::arguments::Arguments;
use super::value::Value;
use crate::Result;
use crate::signature::Signature;

type Body = dyn Fn(Arguments) -> Result<Value>;

/// A closure plus the signature its calls are validated against.
///
/// Two natives are equal when they share the same closure, which is the
/// case for clones of one another.
#[derive(Clone)]
pub struct Native {
    name: Rc<str>,
    signature: Signature,
    body: Rc<Body>,
}

impl Native {
    pub(crate) fn new<F>(name: impl Into<String>, signature: impl Into<Signature>, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + 'static,
    {
        Self {
            name: Rc::from(name.into()),
            signature: signature.into(),
            body: Rc::new(body),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared signature.
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) fn call(&self, arguments: Arguments) -> Result<Value> {
        self.signature
            .check(arguments.positional_len(), &arguments.keyword_names())?;
        (self.body)(arguments)
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Native {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.name, self.signature)
    }
}
