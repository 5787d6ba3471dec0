//! Integration tests for encodings and separator-aware splitting.

#![cfg(feature = "text")]

use lazyfn::Error;
use lazyfn::text::{Encoding, LINE_SEPARATORS, Splittable, decoder, encoder, rsplit, split, split_encoded};
use rstest::rstest;

// =============================================================================
// Encodings
// =============================================================================

#[rstest]
#[case("UTF-8", Encoding::Utf8)]
#[case("utf_8_sig", Encoding::Utf8Sig)]
#[case("UTF16", Encoding::Utf16)]
#[case("utf-16-le", Encoding::Utf16Le)]
#[case("UTF-16BE", Encoding::Utf16Be)]
#[case("ISO-8859-1", Encoding::Latin1)]
#[case("US-ASCII", Encoding::Ascii)]
fn labels_are_normalized(#[case] label: &str, #[case] expected: Encoding) {
    assert_eq!(label.parse::<Encoding>(), Ok(expected));
    assert_eq!(Encoding::from_label(expected.label()), Ok(expected));
}

#[rstest]
fn unknown_labels_are_invalid() {
    assert!(matches!(
        Encoding::from_label("ebcdic"),
        Err(Error::InvalidArgument { name: "encoding", .. })
    ));
}

#[rstest]
#[case(Encoding::Utf8, "grüße ✓")]
#[case(Encoding::Utf8Sig, "grüße ✓")]
#[case(Encoding::Utf16Le, "grüße ✓ 𝄞")]
#[case(Encoding::Utf16Be, "grüße ✓ 𝄞")]
#[case(Encoding::Latin1, "grüße")]
#[case(Encoding::Ascii, "plain")]
fn encoder_and_decoder_agree(#[case] encoding: Encoding, #[case] text: &str) {
    let encode = encoder(encoding);
    let decode = decoder(encoding);
    assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
}

#[rstest]
fn decoding_drops_a_leading_mark() {
    assert_eq!(Encoding::Utf8Sig.decode(b"\xEF\xBB\xBFhi").unwrap(), "hi");
    assert_eq!(Encoding::Utf8.decode(b"\xEF\xBB\xBFhi").unwrap(), "\u{feff}hi");
    assert_eq!(Encoding::Utf16.decode(&[0xFF, 0xFE, b'h', 0]).unwrap(), "h");
    assert_eq!(Encoding::Utf16.decode(&[0xFE, 0xFF, 0, b'h']).unwrap(), "h");
    assert_eq!(Encoding::Utf16.decode(&[b'h', 0]).unwrap(), "h");
}

#[rstest]
#[case(Encoding::Ascii, "é")]
#[case(Encoding::Latin1, "✓")]
fn unrepresentable_characters_fail_to_encode(#[case] encoding: Encoding, #[case] text: &str) {
    assert_eq!(
        encoding.encode(text),
        Err(Error::Encode { encoding: encoding.label() })
    );
}

#[rstest]
#[case(Encoding::Utf8, &[0xC3][..])]
#[case(Encoding::Ascii, &[0x80][..])]
#[case(Encoding::Utf16Le, &[b'a'][..])]
#[case(Encoding::Utf16Le, &[0x00, 0xD8][..])]
fn malformed_input_fails_to_decode(#[case] encoding: Encoding, #[case] bytes: &[u8]) {
    assert_eq!(
        encoding.decode(bytes),
        Err(Error::Decode { encoding: encoding.label() })
    );
}

// =============================================================================
// Splitting
// =============================================================================

#[rstest]
#[case("a,b,c", vec!["a", "b", "c"], vec!["a,", "b,", "c"])]
#[case(",a,", vec!["", "a", ""], vec![",", "a,", ""])]
#[case("", vec![""], vec![""])]
#[case("none", vec!["none"], vec!["none"])]
fn split_with_and_without_separators(
    #[case] input: &str,
    #[case] dropped: Vec<&str>,
    #[case] kept: Vec<&str>,
) {
    assert_eq!(split(input, ",", false).unwrap(), dropped);
    assert_eq!(split(input, ",", true).unwrap(), kept);
    assert_eq!(kept.concat(), input);
}

#[rstest]
fn overlapping_separators_differ_by_direction() {
    assert_eq!(split("aaa", "aa", false).unwrap(), vec!["", "a"]);
    assert_eq!(rsplit("aaa", "aa", false).unwrap(), vec!["", "a"]);
    assert_eq!(rsplit("a-b-c", "-", true).unwrap(), vec!["c", "b-", "a-"]);
}

#[rstest]
fn bytes_and_text_split_alike() {
    let text = "x\r\ny\rz\n";
    let bytes = text.as_bytes();
    let from_text: Vec<&[u8]> = text.split_lines(true).into_iter().map(str::as_bytes).collect();
    assert_eq!(bytes.split_lines(true), from_text);
    assert_eq!(text.split_lines(false), vec!["x", "y", "z", ""]);
}

#[rstest]
fn encoded_splitting_respects_code_units() {
    // `00 0A 00 41`: bytes 1..3 look like an LF unit but straddle two units.
    let encoded = Encoding::Utf16Le.encode("\u{0a00}\u{4100}\n!").unwrap();
    let newline = Encoding::Utf16Le.encode("\n").unwrap();
    let parts = split_encoded(&encoded, &[newline.as_slice()], 2, true).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(Encoding::Utf16Le.decode(parts[0]).unwrap(), "\u{0a00}\u{4100}\n");
    assert_eq!(Encoding::Utf16Le.decode(parts[1]).unwrap(), "!");
    assert_eq!(split_encoded(&encoded, &[newline.as_slice()], 1, true).unwrap().len(), 3);
}

#[rstest]
fn default_line_separators_prefer_crlf() {
    let parts = split_encoded(b"a\r\nb", &LINE_SEPARATORS, 1, false).unwrap();
    assert_eq!(parts, vec![&b"a"[..], &b"b"[..]]);
}

#[rstest]
fn empty_separators_are_invalid() {
    assert!(matches!(split("abc", "", true), Err(Error::InvalidArgument { .. })));
    assert!(matches!(
        split_encoded(b"abc", &[], 1, true),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        split_encoded(b"abc", &[&b"b"[..]], 0, true),
        Err(Error::InvalidArgument { name: "unit", .. })
    ));
}
