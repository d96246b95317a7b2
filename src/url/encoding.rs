//! URL component percent encoding.
//!
//! Encoding follows `encodeURIComponent`: only the unreserved characters are
//! left as-is, so `&`, `=`, `+`, `#` and `?` in a value can never be mistaken
//! for query syntax. Decoding is lenient and never fails, since the address
//! bar is user-editable.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Decodes a query component.
///
/// `+` is read as a space (form encoding). Malformed escapes such as `%zz`
/// or a trailing `%` are kept literally, and byte sequences that are not
/// valid UTF-8 are replaced with U+FFFD.
pub fn decode_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
