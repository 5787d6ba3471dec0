//! Separator-aware splitting of text and bytes.

use std::ops::Range;

use crate::{Error, Result};

/// The default line separators, longest first so that `CR LF` wins over a
/// lone `CR`.
pub const LINE_SEPARATORS: [&[u8]; 3] = [b"\r\n", b"\r", b"\n"];

fn empty_separator() -> Error {
    Error::invalid_argument("separator", "separator must not be empty")
}

/// The separator among `separators` (tried in order) occurring at `at`.
fn match_at(bytes: &[u8], at: usize, separators: &[&[u8]]) -> Option<usize> {
    separators
        .iter()
        .find(|separator| bytes[at..].starts_with(separator))
        .map(|separator| separator.len())
}

/// Separator occurrences scanning left to right, as `(start, length)`.
fn find_left(bytes: &[u8], separators: &[&[u8]], unit: usize) -> Vec<(usize, usize)> {
    find_separators(bytes, separators, unit, bytes.len())
}

/// Like [`find_left`], but only occurrences starting before `limit` are
/// reported; they may still extend past it.
pub(crate) fn find_separators(
    bytes: &[u8],
    separators: &[&[u8]],
    unit: usize,
    limit: usize,
) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut at = 0;
    let limit = limit.min(bytes.len());
    while at < limit {
        match match_at(bytes, at, separators) {
            Some(length) => {
                found.push((at, length));
                at += length;
            }
            None => at += unit,
        }
    }
    found
}

/// Separator occurrences scanning right to left, returned in ascending
/// order.
fn find_right(bytes: &[u8], separators: &[&[u8]], unit: usize) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut end = bytes.len() - bytes.len() % unit;
    while end > 0 {
        let matched = separators.iter().find(|separator| {
            separator.len() <= end
                && (end - separator.len()) % unit == 0
                && bytes[..end].ends_with(separator)
        });
        match matched {
            Some(separator) => {
                found.push((end - separator.len(), separator.len()));
                end -= separator.len();
            }
            None => end -= unit,
        }
    }
    found.reverse();
    found
}

/// Part ranges between separator occurrences; with `keep`, every part but
/// the last extends over the separator that ends it.
fn part_ranges(length: usize, occurrences: &[(usize, usize)], keep: bool) -> Vec<Range<usize>> {
    let mut ranges = Vec::with_capacity(occurrences.len() + 1);
    let mut start = 0;
    for &(at, separator) in occurrences {
        let end = if keep { at + separator } else { at };
        ranges.push(start..end);
        start = at + separator;
    }
    ranges.push(start..length);
    ranges
}

fn validate(separators: &[&[u8]], unit: usize) -> Result<()> {
    if separators.is_empty() || separators.iter().any(|separator| separator.is_empty()) {
        return Err(empty_separator());
    }
    if unit == 0 {
        return Err(Error::invalid_argument("unit", "code unit must be positive"));
    }
    Ok(())
}

/// Splits `bytes` at any of `separators`, which are only recognized at
/// offsets that are multiples of `unit` (2 for UTF-16 encoded input).
///
/// At each offset the separators are tried in the given order, so list
/// longer ones first when one is a prefix of another.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for an empty separator list, an empty
/// separator or a zero `unit`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::text::split_encoded;
///
/// let utf16 = [b'a', 0, b'\n', 0, b'b', 0];
/// let parts = split_encoded(&utf16, &[&[b'\n', 0]], 2, true).unwrap();
/// assert_eq!(parts, vec![&[b'a', 0, b'\n', 0][..], &[b'b', 0][..]]);
/// ```
pub fn split_encoded<'a>(
    bytes: &'a [u8],
    separators: &[&[u8]],
    unit: usize,
    keep: bool,
) -> Result<Vec<&'a [u8]>> {
    validate(separators, unit)?;
    let occurrences = find_left(bytes, separators, unit);
    Ok(part_ranges(bytes.len(), &occurrences, keep)
        .into_iter()
        .map(|range| &bytes[range])
        .collect())
}

/// Types that can be split at a separator.
///
/// Splitting `"a,b,"` at `","` yields `"a"`, `"b"` and a final empty part;
/// with `keep` the separator stays at the end of every part but the last
/// (`"a,"`, `"b,"`, `""`), so concatenating the parts restores the input.
pub trait Splittable {
    /// Left-to-right split.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty separator.
    fn split_on<'a>(&'a self, separator: &Self, keep: bool) -> Result<Vec<&'a Self>>;

    /// Split scanning for separators from the right; parts are returned
    /// right to left.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty separator.
    fn rsplit_on<'a>(&'a self, separator: &Self, keep: bool) -> Result<Vec<&'a Self>>;

    /// Split at `CR LF`, `CR` or `LF`.
    fn split_lines(&self, keep: bool) -> Vec<&Self>;
}

impl Splittable for [u8] {
    fn split_on<'a>(&'a self, separator: &Self, keep: bool) -> Result<Vec<&'a Self>> {
        split_encoded(self, &[separator], 1, keep)
    }

    fn rsplit_on<'a>(&'a self, separator: &Self, keep: bool) -> Result<Vec<&'a Self>> {
        validate(&[separator], 1)?;
        let occurrences = find_right(self, &[separator], 1);
        Ok(part_ranges(self.len(), &occurrences, keep)
            .into_iter()
            .rev()
            .map(|range| &self[range])
            .collect())
    }

    fn split_lines(&self, keep: bool) -> Vec<&Self> {
        let occurrences = find_left(self, &LINE_SEPARATORS, 1);
        part_ranges(self.len(), &occurrences, keep)
            .into_iter()
            .map(|range| &self[range])
            .collect()
    }
}

// A valid UTF-8 separator only matches valid UTF-8 at character boundaries,
// so byte ranges are always valid `str` ranges.
impl Splittable for str {
    fn split_on<'a>(&'a self, separator: &Self, keep: bool) -> Result<Vec<&'a Self>> {
        validate(&[separator.as_bytes()], 1)?;
        let occurrences = find_left(self.as_bytes(), &[separator.as_bytes()], 1);
        Ok(part_ranges(self.len(), &occurrences, keep)
            .into_iter()
            .map(|range| &self[range])
            .collect())
    }

    fn rsplit_on<'a>(&'a self, separator: &Self, keep: bool) -> Result<Vec<&'a Self>> {
        validate(&[separator.as_bytes()], 1)?;
        let occurrences = find_right(self.as_bytes(), &[separator.as_bytes()], 1);
        Ok(part_ranges(self.len(), &occurrences, keep)
            .into_iter()
            .rev()
            .map(|range| &self[range])
            .collect())
    }

    fn split_lines(&self, keep: bool) -> Vec<&Self> {
        let occurrences = find_left(self.as_bytes(), &LINE_SEPARATORS, 1);
        part_ranges(self.len(), &occurrences, keep)
            .into_iter()
            .map(|range| &self[range])
            .collect()
    }
}

/// Free-function form of [`Splittable::split_on`].
///
/// # Errors
///
/// [`Error::InvalidArgument`] for an empty separator.
///
/// # Examples
///
/// ```rust
/// use lazyfn::text::split;
///
/// assert_eq!(split("a--b--", "--", false).unwrap(), vec!["a", "b", ""]);
/// assert_eq!(split("a--b--", "--", true).unwrap(), vec!["a--", "b--", ""]);
/// assert!(split("abc", "", false).is_err());
/// ```
pub fn split<'a, S: Splittable + ?Sized>(input: &'a S, separator: &S, keep: bool) -> Result<Vec<&'a S>> {
    input.split_on(separator, keep)
}

/// Free-function form of [`Splittable::rsplit_on`].
///
/// # Errors
///
/// [`Error::InvalidArgument`] for an empty separator.
///
/// # Examples
///
/// ```rust
/// use lazyfn::text::rsplit;
///
/// assert_eq!(rsplit("aaa", "aa", false).unwrap(), vec!["", "a"]);
/// assert_eq!(rsplit("x;y", ";", true).unwrap(), vec!["y", "x;"]);
/// ```
pub fn rsplit<'a, S: Splittable + ?Sized>(input: &'a S, separator: &S, keep: bool) -> Result<Vec<&'a S>> {
    input.rsplit_on(separator, keep)
}

/// Free-function form of [`Splittable::split_lines`].
pub fn split_lines<S: Splittable + ?Sized>(input: &S, keep: bool) -> Vec<&S> {
    input.split_lines(keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a\nbb\nccc", false, vec!["a", "bb", "ccc"])]
    #[case("a\r\nb\rc\n", true, vec!["a\r\n", "b\r", "c\n", ""])]
    #[case("\n\n", false, vec!["", "", ""])]
    #[case("", true, vec![""])]
    fn lines(#[case] input: &str, #[case] keep: bool, #[case] expected: Vec<&str>) {
        assert_eq!(split_lines(input, keep), expected);
    }

    #[rstest]
    fn kept_parts_concatenate_to_input() {
        let input = "one||two|||three||";
        let parts = split(input, "||", true).unwrap();
        assert_eq!(parts.concat(), input);
        assert_eq!(parts, vec!["one||", "two||", "|three||", ""]);
    }

    #[rstest]
    fn right_split_matches_from_the_end() {
        assert_eq!(rsplit("one|||two", "||", false).unwrap(), vec!["two", "one|"]);
        assert_eq!(split("one|||two", "||", false).unwrap(), vec!["one", "|two"]);
    }

    #[rstest]
    fn bytes_split_like_text() {
        let input: &[u8] = b"k=v=w";
        assert_eq!(split(input, b"=".as_slice(), false).unwrap(), vec![&b"k"[..], b"v", b"w"]);
        assert_eq!(rsplit(input, b"=".as_slice(), true).unwrap(), vec![&b"w"[..], b"v=", b"k="]);
        assert_eq!(split_lines(b"x\r\ny".as_slice(), false), vec![&b"x"[..], b"y"]);
    }

    #[rstest]
    fn empty_separator_is_rejected() {
        assert!(matches!(
            split(b"abc".as_slice(), b"".as_slice(), true),
            Err(Error::InvalidArgument { name: "separator", .. })
        ));
        assert!(rsplit("abc", "", true).is_err());
        assert!(split_encoded(b"abc", &[], 1, true).is_err());
    }

    #[rstest]
    fn encoded_separators_respect_code_units() {
        // "\u{0a00}" in UTF-16LE is [0x00, 0x0a]; the byte pair 0x0a,0x00
        // straddling it must not count as a line feed.
        let bytes = [b'a', 0x00, 0x00, 0x0a, 0x00, b'b'];
        let parts = split_encoded(&bytes, &[&[0x0a, 0x00]], 2, false).unwrap();
        assert_eq!(parts, vec![&bytes[..]]);
        let parts = split_encoded(&bytes, &[&[0x0a, 0x00]], 1, false).unwrap();
        assert_eq!(parts.len(), 2);
    }
}
