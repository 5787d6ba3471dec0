//! Decoded reversal on top of the byte engine.

use std::io::{Read, Seek, SeekFrom};
use std::iter::FusedIterator;

use super::bytes::ReversedLines;
use super::options::TextReversalOptions;
use crate::Result;
use crate::text::Encoding;

const BOM: char = '\u{feff}';

/// Decoded lines of a stream, last line first.
///
/// When the stream starts with a byte order mark, the first line of the
/// stream (emitted last) carries it as a leading `U+FEFF`.
#[derive(Debug)]
pub struct ReversedTextLines<R> {
    lines: ReversedLines<R>,
    encoding: Encoding,
    bom: bool,
}

impl<R> ReversedTextLines<R> {
    /// Encoding the lines are decoded with, after BOM detection.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Gives the stream back, wherever it is currently positioned.
    pub fn into_inner(self) -> R
    where
        R: Read + Seek,
    {
        self.lines.into_inner()
    }
}

impl<R: Read + Seek> Iterator for ReversedTextLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(line) = self.lines.next() else {
            // A stream holding nothing but the BOM.
            return std::mem::take(&mut self.bom).then(|| Ok(BOM.to_string()));
        };
        Some(line.and_then(|line| {
            let mut text = self.encoding.decode(&line)?;
            if self.bom && self.lines.reached_head() {
                self.bom = false;
                text.insert(0, BOM);
            }
            Ok(text)
        }))
    }
}

impl<R: Read + Seek> FusedIterator for ReversedTextLines<R> {}

/// Iterates the decoded lines of `stream` from last to first.
///
/// The separator is encoded with the stream's encoding and matched on code
/// unit boundaries. `Utf16` picks its byte order from the BOM, defaulting
/// to little endian. The whole stream is read, starting from offset zero.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an empty
/// separator or a zero batch size on a non-empty stream;
/// [`Error::Encode`](crate::Error::Encode) when the separator cannot be
/// encoded; [`Error::Io`](crate::Error::Io) from the stream. Lines that fail
/// to decode surface as [`Error::Decode`](crate::Error::Decode) items.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use lazyfn::reversal::{TextReversalOptions, reverse_text};
/// use lazyfn::text::Encoding;
///
/// let stream = Cursor::new(b"\xFF\xFEa\0;\0b\0".to_vec());
/// let options = TextReversalOptions::new(Encoding::Utf16).with_lines_separator(";");
/// let lines: Vec<String> = reverse_text(stream, options)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, vec!["b".to_owned(), "\u{feff}a;".to_owned()]);
/// ```
pub fn reverse_text<R: Read + Seek>(mut stream: R, options: TextReversalOptions) -> Result<ReversedTextLines<R>> {
    options.validate()?;
    stream.seek(SeekFrom::Start(0))?;
    let mut head = Vec::with_capacity(4);
    stream.by_ref().take(4).read_to_end(&mut head)?;

    let bom = options.encoding.bom_at(&head);
    let encoding = match options.encoding.resolve(&head) {
        Encoding::Utf8Sig => Encoding::Utf8,
        resolved => resolved,
    };
    let separators = match &options.lines_separator {
        Some(separator) => vec![encoding.encode(separator)?],
        None => ["\r\n", "\r", "\n"]
            .into_iter()
            .map(|separator| encoding.encode(separator))
            .collect::<Result<_>>()?,
    };
    let lines = ReversedLines::start(
        stream,
        separators,
        encoding.code_unit(),
        options.keep_separator,
        options.aligned_batch_size(encoding),
        bom.len() as u64,
    )?;
    Ok(ReversedTextLines {
        lines,
        encoding,
        bom: !bom.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rstest::rstest;
    use std::io::Cursor;

    fn reversed(input: Vec<u8>, options: TextReversalOptions) -> Vec<String> {
        reverse_text(Cursor::new(input), options)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap()
    }

    fn utf16le(text: &str) -> Vec<u8> {
        Encoding::Utf16Le.encode(text).unwrap()
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(64)]
    fn utf16_separators_stay_aligned(#[case] batch_size: usize) {
        // 0A 00 straddles the units of U+0A41 U+0100 and is not a newline.
        let input = utf16le("x\u{0a41}\u{0100}y\nz");
        let options = TextReversalOptions::new(Encoding::Utf16Le).with_batch_size(batch_size);
        assert_eq!(reversed(input, options), vec!["z", "x\u{0a41}\u{0100}y\n"]);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    fn utf8_bom_is_kept_on_head_line(#[case] batch_size: usize) {
        let mut input = b"\xEF\xBB\xBF".to_vec();
        input.extend_from_slice("première\nligne".as_bytes());
        let options = TextReversalOptions::new(Encoding::Utf8Sig).with_batch_size(batch_size);
        assert_eq!(reversed(input, options), vec!["ligne", "\u{feff}première\n"]);
    }

    #[rstest]
    fn big_endian_bom_selects_byte_order() {
        let mut input = vec![0xFE, 0xFF];
        input.extend(Encoding::Utf16Be.encode("a\nb").unwrap());
        let lines = reverse_text(Cursor::new(input), TextReversalOptions::new(Encoding::Utf16)).unwrap();
        assert_eq!(lines.encoding(), Encoding::Utf16Be);
        assert_eq!(lines.collect::<Result<Vec<_>>>().unwrap(), vec!["b", "\u{feff}a\n"]);
    }

    #[rstest]
    fn bom_only_stream_keeps_its_bom() {
        let options = TextReversalOptions::new(Encoding::Utf8Sig);
        assert_eq!(reversed(b"\xEF\xBB\xBF".to_vec(), options), vec!["\u{feff}"]);
    }

    #[rstest]
    fn plain_utf8_invents_no_bom() {
        let options = TextReversalOptions::default().with_keep_separator(false);
        assert_eq!(reversed(b"a\r\nb".to_vec(), options), vec!["b", "a"]);
    }

    #[rstest]
    fn unencodable_separator_fails_up_front() {
        let options = TextReversalOptions::new(Encoding::Ascii).with_lines_separator("§");
        assert!(matches!(
            reverse_text(Cursor::new(Vec::new()), options),
            Err(Error::Encode { encoding: "ascii" })
        ));
    }

    #[rstest]
    fn malformed_line_is_yielded_as_error() {
        let mut lines = reverse_text(Cursor::new(b"ok\n\xFF".to_vec()), TextReversalOptions::default()).unwrap();
        assert!(matches!(lines.next(), Some(Err(Error::Decode { .. }))));
        assert_eq!(lines.next(), Some(Ok("ok\n".to_owned())));
        assert_eq!(lines.next(), None);
    }
}
