//! Parameter signatures as plain data.
//!
//! A [`Signature`] describes what a callable accepts. The function algebra
//! validates calls against it, and currying asks it two questions about a
//! partial argument list: could more arguments still complete it
//! ([`expects`](Signature::expects)), and is it already complete
//! ([`all_set`](Signature::all_set))?
//!
//! Arguments are described by shape only: the number of positionals and
//! the names of the keywords.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::signature::{PlainSignature, Signature};
//!
//! let signature: Signature = PlainSignature::builder()
//!     .positional_or_keyword("x")
//!     .positional_or_keyword("y")
//!     .build()
//!     .unwrap()
//!     .into();
//!
//! assert!(signature.expects(1, &[]));
//! assert!(!signature.all_set(1, &[]));
//! assert!(signature.all_set(1, &["y"]));
//! assert_eq!(signature.bind(1, &[]).unwrap().to_string(), "(y)");
//! ```

mod overloaded;
mod parameter;
mod plain;

use std::fmt;

pub use overloaded::OverloadedSignature;
pub use parameter::{Parameter, ParameterKind};
pub use plain::{PlainSignature, SignatureBuilder};

use crate::Result;

/// A single parameter list or a set of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signature {
    /// One parameter list.
    Plain(PlainSignature),
    /// Several parameter lists; a call matching any of them is accepted.
    Overloaded(OverloadedSignature),
}

impl Signature {
    /// `(*args, **kwargs)`
    pub fn variadic() -> Self {
        Self::Plain(PlainSignature::variadic())
    }

    /// The alternatives; a plain signature is its only alternative.
    pub fn alternatives(&self) -> &[PlainSignature] {
        match self {
            Self::Plain(plain) => std::slice::from_ref(plain),
            Self::Overloaded(overloaded) => overloaded.alternatives(),
        }
    }

    /// Whether some alternative absorbs the arguments without surplus.
    pub fn expects(&self, positional: usize, keywords: &[&str]) -> bool {
        self.alternatives()
            .iter()
            .any(|alternative| alternative.expects(positional, keywords))
    }

    /// Whether some alternative is fully bound by the arguments.
    pub fn all_set(&self, positional: usize, keywords: &[&str]) -> bool {
        self.alternatives()
            .iter()
            .any(|alternative| alternative.all_set(positional, keywords))
    }

    /// Required parameters still unbound, for the alternative closest to
    /// completion.
    ///
    /// # Errors
    ///
    /// No alternative absorbs the arguments.
    pub fn missing(&self, positional: usize, keywords: &[&str]) -> Result<Vec<String>> {
        first_success(self.alternatives(), |alternative| {
            alternative.missing(positional, keywords)
        })
        .map(|candidates| {
            candidates
                .into_iter()
                .min_by_key(Vec::len)
                .unwrap_or_default()
        })
    }

    /// Call-site validation: succeeds when some alternative accepts the call.
    ///
    /// # Errors
    ///
    /// The failure reported by the first alternative.
    pub fn check(&self, positional: usize, keywords: &[&str]) -> Result<()> {
        first_success(self.alternatives(), |alternative| {
            alternative.check(positional, keywords)
        })
        .map(drop)
    }

    /// Residual signature after binding; for overloads, the union of the
    /// residuals of every alternative that expects the arguments.
    ///
    /// # Errors
    ///
    /// No alternative expects the arguments.
    pub fn bind(&self, positional: usize, keywords: &[&str]) -> Result<Self> {
        self.bind_each(|alternative| alternative.bind(positional, keywords))
    }

    /// [`bind`](Self::bind) with keywords only.
    ///
    /// # Errors
    ///
    /// No alternative accepts the keywords.
    pub fn bind_keywords(&self, keywords: &[&str]) -> Result<Self> {
        self.bind(0, keywords)
    }

    /// Residual signature after fixing `positional` trailing arguments.
    ///
    /// # Errors
    ///
    /// No alternative has room for them.
    pub fn bind_right(&self, positional: usize) -> Result<Self> {
        self.bind_each(|alternative| alternative.bind_right(positional))
    }

    /// Signature of the same function with its positional arguments
    /// reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        match self {
            Self::Plain(plain) => Self::Plain(plain.flipped()),
            Self::Overloaded(overloaded) => {
                let flipped = overloaded.alternatives().iter().map(PlainSignature::flipped).collect();
                OverloadedSignature::collapse(flipped).unwrap_or_else(|| self.clone())
            }
        }
    }

    fn bind_each<F>(&self, bind: F) -> Result<Self>
    where
        F: Fn(&PlainSignature) -> Result<PlainSignature>,
    {
        let residuals = first_success(self.alternatives(), bind)?;
        OverloadedSignature::new(residuals)
    }
}

/// Applies `operation` to every alternative and keeps the successes, or
/// returns the first failure when there are none.
fn first_success<T, F>(alternatives: &[PlainSignature], operation: F) -> Result<Vec<T>>
where
    F: Fn(&PlainSignature) -> Result<T>,
{
    let mut successes = Vec::new();
    let mut failure = None;
    for alternative in alternatives {
        match operation(alternative) {
            Ok(value) => successes.push(value),
            Err(error) => {
                failure.get_or_insert(error);
            }
        }
    }
    match failure {
        Some(error) if successes.is_empty() => Err(error),
        _ => Ok(successes),
    }
}

impl From<PlainSignature> for Signature {
    fn from(plain: PlainSignature) -> Self {
        Self::Plain(plain)
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::variadic()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(plain) => fmt::Display::fmt(plain, formatter),
            Self::Overloaded(overloaded) => fmt::Display::fmt(overloaded, formatter),
        }
    }
}
