//! Error type shared by every area of the crate.
//!
//! All fallible operations return [`Result`], whose error is the single
//! [`Error`] enum below. The enum is `Clone + PartialEq` so tests can assert
//! on the exact failure that surfaced.

use thiserror::Error;

/// Errors raised by sequence combinators, the function algebra, the
/// signature model, the sort registry and the stream reversal engine.
///
/// # Examples
///
/// ```rust
/// use lazyfn::Error;
///
/// let error = Error::TooManyPositional { expected: 2, given: 3 };
/// assert!(error.is_type_error());
/// assert_eq!(
///     error.to_string(),
///     "takes at most 2 positional arguments but 3 were given"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `first`/`last` (or a reducer without a seed) found no element.
    #[error("sequence is empty")]
    EmptySequence,

    /// A size, step, separator or similar argument is out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Human readable explanation.
        reason: String,
    },

    /// More positional arguments than the signature can absorb.
    #[error("takes at most {expected} positional arguments but {given} were given")]
    TooManyPositional {
        /// Number of positional slots the signature declares.
        expected: usize,
        /// Number of positional arguments supplied.
        given: usize,
    },

    /// A keyword names no declared parameter and there is no `**kwargs` bucket.
    #[error("got an unexpected keyword argument `{0}`")]
    UnknownKeyword(String),

    /// Required parameters are still unbound at call time.
    #[error("missing required arguments: {}", .0.join(", "))]
    MissingArguments(Vec<String>),

    /// A parameter was bound both positionally and by keyword.
    #[error("got multiple values for argument `{0}`")]
    DuplicateArgument(String),

    /// A value of the wrong kind reached a function body.
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// What the function needed.
        expected: &'static str,
        /// What it actually received.
        found: &'static str,
    },

    /// The operation has no rule for this kind of input.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// No sorting algorithm is registered under this name.
    #[error("sorting algorithm `{0}` is not registered")]
    AlgorithmNotFound(String),

    /// A sorting algorithm with this name exists and overwriting was not requested.
    #[error("sorting algorithm `{0}` is already registered")]
    AlgorithmAlreadyRegistered(String),

    /// Bytes are not valid in the named encoding.
    #[error("cannot decode bytes as {encoding}")]
    Decode {
        /// Canonical encoding label.
        encoding: &'static str,
    },

    /// Text contains characters the named encoding cannot represent.
    #[error("cannot encode text as {encoding}")]
    Encode {
        /// Canonical encoding label.
        encoding: &'static str,
    },

    /// The underlying stream failed.
    #[error("I/O error ({kind:?}): {message}")]
    Io {
        /// Kind reported by the stream.
        kind: std::io::ErrorKind,
        /// Rendered message of the original error.
        message: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for failures caused by the shape or kind of call
    /// arguments.
    ///
    /// Curried functions only ever recover from this family, and only while
    /// their signature shows the argument list is still incomplete.
    pub const fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::TooManyPositional { .. }
                | Self::UnknownKeyword(_)
                | Self::MissingArguments(_)
                | Self::DuplicateArgument(_)
                | Self::WrongType { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
