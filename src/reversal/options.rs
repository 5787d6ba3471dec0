//! Knobs for the reversal engine.

use crate::text::Encoding;
use crate::{Error, Result};

/// Batch size used when none is configured.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Options for [`reverse_bytes`](super::reverse_bytes).
///
/// # Examples
///
/// ```rust
/// use lazyfn::reversal::ReversalOptions;
///
/// let options = ReversalOptions::default()
///     .with_batch_size(4)
///     .with_lines_separator(b"||".to_vec())
///     .with_keep_separator(false);
/// assert_eq!(options.batch_size, 4);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReversalOptions {
    /// Bytes read per backward seek.
    pub batch_size: usize,
    /// Custom separator; `None` splits on CR, LF and CRLF.
    pub lines_separator: Option<Vec<u8>>,
    /// Whether emitted lines keep their trailing separator.
    pub keep_separator: bool,
}

impl ReversalOptions {
    /// Sets the batch size.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets a custom separator.
    #[must_use]
    pub fn with_lines_separator(mut self, separator: impl Into<Vec<u8>>) -> Self {
        self.lines_separator = Some(separator.into());
        self
    }

    /// Chooses whether separators stay attached to the lines.
    #[must_use]
    pub const fn with_keep_separator(mut self, keep: bool) -> Self {
        self.keep_separator = keep;
        self
    }

    /// Checks the options that can be judged without the stream.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty custom separator.
    pub fn validate(&self) -> Result<()> {
        match &self.lines_separator {
            Some(separator) if separator.is_empty() => Err(empty_separator()),
            _ => Ok(()),
        }
    }
}

impl Default for ReversalOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            lines_separator: None,
            keep_separator: true,
        }
    }
}

/// Options for [`reverse_text`](super::reverse_text).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextReversalOptions {
    /// Encoding of the stream.
    pub encoding: Encoding,
    /// Bytes read per backward seek, rounded up to the code unit.
    pub batch_size: usize,
    /// Custom separator, encoded with `encoding` before use.
    pub lines_separator: Option<String>,
    /// Whether emitted lines keep their trailing separator.
    pub keep_separator: bool,
}

impl TextReversalOptions {
    /// Options for a stream in `encoding`, otherwise defaulted.
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Sets the stream encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the batch size.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets a custom separator.
    #[must_use]
    pub fn with_lines_separator(mut self, separator: impl Into<String>) -> Self {
        self.lines_separator = Some(separator.into());
        self
    }

    /// Chooses whether separators stay attached to the lines.
    #[must_use]
    pub const fn with_keep_separator(mut self, keep: bool) -> Self {
        self.keep_separator = keep;
        self
    }

    /// Checks the options that can be judged without the stream.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty custom separator.
    pub fn validate(&self) -> Result<()> {
        match &self.lines_separator {
            Some(separator) if separator.is_empty() => Err(empty_separator()),
            _ => Ok(()),
        }
    }

    /// Batch size rounded up to a whole number of code units of `encoding`.
    pub(crate) const fn aligned_batch_size(&self, encoding: Encoding) -> usize {
        let unit = encoding.code_unit();
        self.batch_size.div_ceil(unit) * unit
    }
}

impl Default for TextReversalOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            lines_separator: None,
            keep_separator: true,
        }
    }
}

fn empty_separator() -> Error {
    Error::invalid_argument("lines_separator", "separator must not be empty")
}
