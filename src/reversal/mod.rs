//! Reading the lines of a stream backwards.
//!
//! The engine seeks to the end of a [`Read`](std::io::Read) +
//! [`Seek`](std::io::Seek) stream and reads fixed-size batches towards the
//! head, so memory stays proportional to the batch size plus the longest
//! line. Lines come out last first, each as soon as its start has been
//! read.
//!
//! [`reverse_bytes`] works on raw bytes; [`reverse_text`] encodes the
//! separator for the stream's [`Encoding`](crate::text::Encoding), keeps
//! matches on code unit boundaries and decodes every line.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Cursor;
//! use lazyfn::reversal::{ReversalOptions, reverse_bytes};
//!
//! let options = ReversalOptions::default()
//!     .with_batch_size(2)
//!     .with_lines_separator(b"--".to_vec())
//!     .with_keep_separator(false);
//! let lines: Vec<Vec<u8>> = reverse_bytes(Cursor::new(b"one--two--three"), options)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(lines, vec![b"three".to_vec(), b"two".to_vec(), b"one".to_vec()]);
//! ```

mod bytes;
mod options;
mod text;

pub use bytes::{ReversedLines, reverse_bytes};
pub use options::{DEFAULT_BATCH_SIZE, ReversalOptions, TextReversalOptions};
pub use text::{ReversedTextLines, reverse_text};
