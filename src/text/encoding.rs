//! Text encodings understood by the byte/text utilities.

use std::fmt;

use crate::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// A text encoding.
///
/// `Utf8Sig` and `Utf16` are the BOM-bearing encodings: decoding strips a
/// leading byte order mark, and `Utf16` picks its byte order from it
/// (little endian when there is none). Encoding never writes a BOM.
///
/// # Examples
///
/// ```rust
/// use lazyfn::text::Encoding;
///
/// let encoding = Encoding::from_label("UTF_16").unwrap();
/// assert_eq!(encoding, Encoding::Utf16);
/// assert_eq!(encoding.encode("hi").unwrap(), vec![b'h', 0, b'i', 0]);
/// assert_eq!(encoding.decode(&[0xFE, 0xFF, 0, b'h']).unwrap(), "h");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Encoding {
    /// UTF-8 without BOM handling.
    #[default]
    Utf8,
    /// UTF-8 that drops a leading BOM when decoding.
    Utf8Sig,
    /// UTF-16 whose byte order comes from a leading BOM.
    Utf16,
    /// UTF-16, little endian.
    Utf16Le,
    /// UTF-16, big endian.
    Utf16Be,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    /// 7-bit ASCII.
    Ascii,
}

impl Encoding {
    /// Parses a label; case, `_` and `-` are not significant.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for unknown labels.
    pub fn from_label(label: &str) -> Result<Self> {
        let normalized: String = label
            .chars()
            .filter(|character| !matches!(character, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "utf8" | "u8" | "utf" => Ok(Self::Utf8),
            "utf8sig" => Ok(Self::Utf8Sig),
            "utf16" | "u16" => Ok(Self::Utf16),
            "utf16le" => Ok(Self::Utf16Le),
            "utf16be" => Ok(Self::Utf16Be),
            "latin1" | "latin" | "l1" | "iso88591" | "iso885911987" => Ok(Self::Latin1),
            "ascii" | "usascii" | "646" => Ok(Self::Ascii),
            _ => Err(Error::invalid_argument(
                "encoding",
                format!("unknown encoding `{label}`"),
            )),
        }
    }

    /// Canonical label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Sig => "utf-8-sig",
            Self::Utf16 => "utf-16",
            Self::Utf16Le => "utf-16-le",
            Self::Utf16Be => "utf-16-be",
            Self::Latin1 => "latin-1",
            Self::Ascii => "ascii",
        }
    }

    /// Width of one code unit in bytes.
    pub const fn code_unit(self) -> usize {
        match self {
            Self::Utf16 | Self::Utf16Le | Self::Utf16Be => 2,
            _ => 1,
        }
    }

    /// Byte order mark this encoding recognizes, empty when it has none.
    ///
    /// `Utf16` reports the little-endian mark; [`bom_at`](Self::bom_at)
    /// also recognizes the big-endian one.
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8Sig => UTF8_BOM,
            Self::Utf16 => UTF16_LE_BOM,
            _ => &[],
        }
    }

    /// The byte order mark `bytes` starts with, if this encoding carries one.
    pub fn bom_at(self, bytes: &[u8]) -> &'static [u8] {
        match self {
            Self::Utf8Sig if bytes.starts_with(UTF8_BOM) => UTF8_BOM,
            Self::Utf16 if bytes.starts_with(UTF16_LE_BOM) => UTF16_LE_BOM,
            Self::Utf16 if bytes.starts_with(UTF16_BE_BOM) => UTF16_BE_BOM,
            _ => &[],
        }
    }

    /// The byte-order-specific encoding for a stream starting with `head`.
    ///
    /// Only `Utf16` changes: it becomes `Utf16Be` after a big-endian BOM and
    /// `Utf16Le` otherwise.
    pub fn resolve(self, head: &[u8]) -> Self {
        match self {
            Self::Utf16 if head.starts_with(UTF16_BE_BOM) => Self::Utf16Be,
            Self::Utf16 => Self::Utf16Le,
            other => other,
        }
    }

    /// Encodes `text` without a BOM.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when a character has no representation.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        let unrepresentable = Error::Encode {
            encoding: self.label(),
        };
        match self {
            Self::Utf8 | Self::Utf8Sig => Ok(text.as_bytes().to_vec()),
            Self::Utf16 | Self::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Self::Latin1 => text
                .chars()
                .map(|character| u8::try_from(u32::from(character)).map_err(|_| unrepresentable.clone()))
                .collect(),
            Self::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(unrepresentable)
                }
            }
        }
    }

    /// Decodes `bytes`, dropping a leading BOM for BOM-bearing encodings.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] for malformed input.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let malformed = Error::Decode {
            encoding: self.label(),
        };
        let body = &bytes[self.bom_at(bytes).len()..];
        match self.resolve(bytes) {
            Self::Utf8 | Self::Utf8Sig => String::from_utf8(body.to_vec()).map_err(|_| malformed),
            Self::Utf16Le => decode_utf16(body, u16::from_le_bytes).ok_or(malformed),
            Self::Utf16Be => decode_utf16(body, u16::from_be_bytes).ok_or(malformed),
            Self::Latin1 => Ok(body.iter().copied().map(char::from).collect()),
            Self::Ascii => {
                if body.is_ascii() {
                    Ok(body.iter().copied().map(char::from).collect())
                } else {
                    Err(malformed)
                }
            }
            Self::Utf16 => Err(malformed),
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

impl fmt::Display for Encoding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl std::str::FromStr for Encoding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        Self::from_label(label)
    }
}

/// A reusable `bytes -> text` function.
///
/// # Examples
///
/// ```rust
/// use lazyfn::text::{Encoding, decoder};
///
/// let decode = decoder(Encoding::Latin1);
/// assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9]).unwrap(), "café");
/// ```
pub fn decoder(encoding: Encoding) -> impl Fn(&[u8]) -> Result<String> {
    move |bytes| encoding.decode(bytes)
}

/// A reusable `text -> bytes` function.
pub fn encoder(encoding: Encoding) -> impl Fn(&str) -> Result<Vec<u8>> {
    move |text| encoding.encode(text)
}
