//! Tail-first line reader over seekable byte streams.

use std::io::{Read, Seek, SeekFrom};
use std::iter::FusedIterator;

use super::options::ReversalOptions;
use crate::text::{LINE_SEPARATORS, find_separators};
use crate::{Error, Result};

/// The fragment whose start has not been read yet.
///
/// Batches are kept as read and joined only once a separator closes the
/// line, so a line spanning many batches is copied a bounded number of times.
#[derive(Debug, Default)]
struct Carry {
    // Front of the fragment last.
    chunks: Vec<Vec<u8>>,
    len: usize,
}

impl Carry {
    fn of(bytes: Vec<u8>) -> Self {
        let mut carry = Self::default();
        carry.push_front(bytes);
        carry
    }

    const fn len(&self) -> usize {
        self.len
    }

    fn push_front(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.len += chunk.len();
            self.chunks.push(chunk);
        }
    }

    /// The first `count` bytes, or all of them when shorter.
    fn prefix(&self, count: usize) -> Vec<u8> {
        let mut prefix = Vec::with_capacity(count.min(self.len));
        for chunk in self.chunks.iter().rev() {
            let wanted = count - prefix.len();
            if wanted == 0 {
                break;
            }
            prefix.extend_from_slice(&chunk[..wanted.min(chunk.len())]);
        }
        prefix
    }

    fn take(&mut self) -> Vec<u8> {
        let mut joined = Vec::with_capacity(self.len);
        for chunk in self.chunks.drain(..).rev() {
            joined.extend_from_slice(&chunk);
        }
        self.len = 0;
        joined
    }

    fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }
}

/// Lines of a stream, last line first.
///
/// Each batch read from the tail is scanned together with the start of the
/// carry, the fragment whose start has not been seen yet. Everything after
/// the first separator found is a complete line; the first part becomes the
/// new carry. A batch without a separator is prepended to the carry as is.
/// The carry left when the head of the stream is reached is the first line.
///
/// Read failures are yielded once, after which the iterator is exhausted.
#[derive(Debug)]
pub struct ReversedLines<R> {
    stream: R,
    separators: Vec<Vec<u8>>,
    longest: usize,
    unit: usize,
    keep: bool,
    batch_size: usize,
    floor: u64,
    position: u64,
    carry: Carry,
    pending: Vec<Vec<u8>>,
    finished: bool,
}

impl<R: Read + Seek> ReversedLines<R> {
    /// Positions the engine at the end of `stream`.
    ///
    /// `separators` must be ordered longest first; matches start at
    /// multiples of `unit` counted from `floor`, the first byte of content.
    pub(crate) fn start(
        mut stream: R,
        mut separators: Vec<Vec<u8>>,
        unit: usize,
        keep: bool,
        batch_size: usize,
        floor: u64,
    ) -> Result<Self> {
        separators.sort_by_key(|separator| std::cmp::Reverse(separator.len()));
        let longest = separators.first().map_or(1, Vec::len);
        let size = stream.seek(SeekFrom::End(0))?;
        let content = size.saturating_sub(floor);
        if content > 0 && batch_size == 0 {
            return Err(Error::invalid_argument(
                "batch_size",
                "batch size must be positive for a non-empty stream",
            ));
        }
        tracing::debug!(
            size,
            floor,
            batch_size,
            batches = content.div_ceil(batch_size.max(1) as u64),
            custom_separator = separators.len() == 1,
            "reversing stream"
        );
        Ok(Self {
            stream,
            separators,
            longest,
            unit: unit.max(1),
            keep,
            batch_size,
            floor,
            position: size.max(floor),
            carry: Carry::default(),
            pending: Vec::new(),
            finished: false,
        })
    }

    /// Whether the first line of the stream has been handed out.
    pub(crate) const fn reached_head(&self) -> bool {
        self.finished && self.pending.is_empty()
    }

    /// Gives the stream back, wherever it is currently positioned.
    pub fn into_inner(self) -> R {
        self.stream
    }

    fn read_batch(&mut self) -> Result<()> {
        let available = self.position - self.floor;
        let length = usize::try_from(available).map_or(self.batch_size, |available| available.min(self.batch_size));
        let offset = self.position - length as u64;
        self.stream.seek(SeekFrom::Start(offset))?;
        let mut data = vec![0; length];
        self.stream.read_exact(&mut data)?;
        tracing::trace!(offset, length, carry = self.carry.len(), "read batch");
        self.position = offset;

        // The carry holds at most one separator, at its end, so only matches
        // starting inside the batch or straddling into the carry are new.
        // Such a match ends within `2 * (longest - 1)` bytes of the carry.
        let separators: Vec<&[u8]> = self.separators.iter().map(Vec::as_slice).collect();
        let limit = length + self.longest - 1;
        let reach = self.carry.len().min(2 * (self.longest - 1));
        data.extend(self.carry.prefix(reach));
        let found = find_separators(&data, &separators, self.unit, limit);
        data.truncate(length);
        if found.is_empty() {
            self.carry.push_front(data);
            return Ok(());
        }
        data.extend(self.carry.take());

        let mut lines = Vec::with_capacity(found.len() + 1);
        let mut begin = 0;
        for (at, size) in found {
            lines.push(data[begin..at + size].to_vec());
            begin = at + size;
        }
        if begin < data.len() {
            lines.push(data[begin..].to_vec());
        }

        let mut lines = lines.into_iter();
        self.carry = Carry::of(lines.next().unwrap_or_default());
        self.pending = lines.collect();
        Ok(())
    }

    fn finish_line(&self, mut line: Vec<u8>) -> Vec<u8> {
        if !self.keep {
            let separator = self.separators.iter().find(|separator| {
                line.len() >= separator.len()
                    && (line.len() - separator.len()) % self.unit == 0
                    && line.ends_with(separator)
            });
            if let Some(separator) = separator {
                line.truncate(line.len() - separator.len());
            }
        }
        line
    }
}

impl<R: Read + Seek> Iterator for ReversedLines<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop() {
                return Some(Ok(self.finish_line(line)));
            }
            if self.finished {
                return None;
            }
            if self.position == self.floor {
                self.finished = true;
                let head = self.carry.take();
                return (!head.is_empty()).then(|| Ok(self.finish_line(head)));
            }
            if let Err(error) = self.read_batch() {
                self.finished = true;
                self.carry.clear();
                return Some(Err(error));
            }
        }
    }
}

impl<R: Read + Seek> FusedIterator for ReversedLines<R> {}

/// Iterates the lines of `stream` from last to first.
///
/// Without a custom separator, CR, LF and CRLF all end a line; a CR that
/// ends one batch and the LF that starts the next are read as one CRLF.
/// A trailing separator does not produce an empty last line. With
/// `keep_separator`, the emitted lines concatenated in stream order are
/// exactly the stream.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for an empty separator, or a zero batch size on
/// a non-empty stream; [`Error::Io`] when seeking to the end fails. Later
/// read failures are yielded by the iterator.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use lazyfn::reversal::{ReversalOptions, reverse_bytes};
///
/// let lines: Vec<Vec<u8>> = reverse_bytes(Cursor::new(b"a\nbb\nccc"), ReversalOptions::default())
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, vec![b"ccc".to_vec(), b"bb\n".to_vec(), b"a\n".to_vec()]);
/// ```
pub fn reverse_bytes<R: Read + Seek>(stream: R, options: ReversalOptions) -> Result<ReversedLines<R>> {
    options.validate()?;
    let separators = options.lines_separator.map_or_else(
        || LINE_SEPARATORS.iter().map(|separator| separator.to_vec()).collect(),
        |separator| vec![separator],
    );
    ReversedLines::start(stream, separators, 1, options.keep_separator, options.batch_size, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn reversed(input: &[u8], options: ReversalOptions) -> Vec<Vec<u8>> {
        reverse_bytes(Cursor::new(input.to_vec()), options)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap()
    }

    fn lines(parts: &[&str]) -> Vec<Vec<u8>> {
        parts.iter().map(|part| part.as_bytes().to_vec()).collect()
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(8192)]
    fn default_separators_any_batch(#[case] batch_size: usize) {
        let options = ReversalOptions::default().with_batch_size(batch_size);
        assert_eq!(reversed(b"a\nbb\nccc", options), lines(&["ccc", "bb\n", "a\n"]));
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    fn trailing_separator_adds_no_empty_line(#[case] batch_size: usize) {
        let options = ReversalOptions::default().with_batch_size(batch_size);
        assert_eq!(reversed(b"x\ny\n", options), lines(&["y\n", "x\n"]));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn crlf_split_across_batches_is_one_separator(#[case] batch_size: usize) {
        let options = ReversalOptions::default().with_batch_size(batch_size);
        assert_eq!(
            reversed(b"one\r\ntwo\rthree\n", options),
            lines(&["three\n", "two\r", "one\r\n"])
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn multi_byte_custom_separator(#[case] batch_size: usize) {
        let options = ReversalOptions::default()
            .with_batch_size(batch_size)
            .with_lines_separator(b"||".to_vec());
        assert_eq!(reversed(b"a||b\nc||d", options), lines(&["d", "b\nc||", "a||"]));
    }

    #[rstest]
    fn separators_stripped_on_request() {
        let options = ReversalOptions::default().with_batch_size(3).with_keep_separator(false);
        assert_eq!(reversed(b"a\r\nb\n\nc", options), lines(&["c", "", "b", "a"]));
    }

    #[rstest]
    fn empty_stream_has_no_lines() {
        assert!(reversed(b"", ReversalOptions::default()).is_empty());
        assert!(reversed(b"", ReversalOptions::default().with_batch_size(0)).is_empty());
    }

    #[rstest]
    fn separator_only_stream() {
        assert_eq!(reversed(b"\n", ReversalOptions::default()), lines(&["\n"]));
        assert_eq!(
            reversed(b"\n\n", ReversalOptions::default().with_batch_size(1)),
            lines(&["\n", "\n"])
        );
    }

    #[rstest]
    fn zero_batch_on_non_empty_stream_fails() {
        let result = reverse_bytes(Cursor::new(b"x".to_vec()), ReversalOptions::default().with_batch_size(0));
        assert!(matches!(result, Err(Error::InvalidArgument { name: "batch_size", .. })));
    }

    #[rstest]
    fn empty_separator_fails_before_touching_stream() {
        let options = ReversalOptions::default().with_lines_separator(Vec::new());
        assert!(reverse_bytes(Cursor::new(Vec::new()), options).is_err());
    }

    #[rstest]
    fn stream_is_handed_back() {
        let mut lines = reverse_bytes(Cursor::new(b"a\nb".to_vec()), ReversalOptions::default()).unwrap();
        assert_eq!(lines.next(), Some(Ok(b"b".to_vec())));
        assert_eq!(lines.into_inner().into_inner(), b"a\nb".to_vec());
    }

    #[rstest]
    fn carry_prefix_spans_chunks() {
        let mut carry = Carry::of(b"cd".to_vec());
        carry.push_front(b"b".to_vec());
        carry.push_front(Vec::new());
        carry.push_front(b"a".to_vec());
        assert_eq!(carry.len(), 4);
        assert_eq!(carry.prefix(3), b"abc".to_vec());
        assert_eq!(carry.prefix(10), b"abcd".to_vec());
        assert!(carry.prefix(0).is_empty());
        assert_eq!(carry.take(), b"abcd".to_vec());
        assert_eq!(carry.len(), 0);
    }

    #[rstest]
    fn line_spanning_many_batches_is_read_whole() {
        let mut input = b"head\r\n".to_vec();
        input.extend(std::iter::repeat_n(b'x', 4 << 20));
        input.extend_from_slice(b"\r\ntail");
        let lines = reversed(&input, ReversalOptions::default().with_batch_size(16));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], b"tail".to_vec());
        assert_eq!(lines[1].len(), (4 << 20) + 2);
        assert!(lines[1].ends_with(b"x\r\n"));
        assert_eq!(lines[2], b"head\r\n".to_vec());
    }

    #[rstest]
    fn concatenation_reproduces_stream() {
        let input = b"alpha\r\nbeta\rgamma\n\ndelta".to_vec();
        for batch_size in 1..=input.len() + 1 {
            let mut lines = reversed(&input, ReversalOptions::default().with_batch_size(batch_size));
            lines.reverse();
            assert_eq!(lines.concat(), input, "batch size {batch_size}");
        }
    }
}
