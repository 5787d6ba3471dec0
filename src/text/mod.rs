//! Encodings and separator-aware splitting.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::text::{Encoding, Splittable, encoder};
//!
//! let encode = encoder(Encoding::Utf16Le);
//! assert_eq!(encode("a").unwrap(), vec![b'a', 0]);
//!
//! let parts = "x\r\ny\n".split_lines(true);
//! assert_eq!(parts, vec!["x\r\n", "y\n", ""]);
//! ```

mod encoding;
mod splitting;

pub use encoding::{Encoding, decoder, encoder};
pub use splitting::{LINE_SEPARATORS, Splittable, rsplit, split, split_encoded, split_lines};

#[cfg(feature = "reversal")]
pub(crate) use splitting::find_separators;
