use crate::character_sets::{hex_value, is_uri_reserved};
use crate::compat::{Cow, String, Vec};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// URI percent-encode set.
/// Everything except ASCII alphanumerics and `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #`
pub const URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encode a string with the URI set.
/// Borrows the input when nothing needs encoding.
pub fn encode_uri(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_SET).into()
}

/// Write URI-encoded string directly to buffer
pub fn encode_uri_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, URI_SET) {
        buffer.push_str(chunk);
    }
}

/// Decode `%XX` escapes, leaving escapes of reserved bytes (`;/?:@&=+$,#`) as written.
/// `+` is not treated as a space.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPercentEncoding`] for a `%` that is not followed by
/// two hex digits, and [`ParseError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn decode_uri(input: &str) -> Result<Cow<'_, str>> {
    let bytes = input.as_bytes();

    // Fast path: nothing to decode
    let Some(first) = memchr::memchr(b'%', bytes) else {
        return Ok(Cow::Borrowed(input));
    };

    let mut decoded = Vec::with_capacity(bytes.len());
    decoded.extend_from_slice(&bytes[..first]);

    let mut i = first;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            decoded.push(b);
            i += 1;
            continue;
        }

        let hi = bytes.get(i + 1).copied().and_then(hex_value);
        let lo = bytes.get(i + 2).copied().and_then(hex_value);
        let (Some(hi), Some(lo)) = (hi, lo) else {
            return Err(ParseError::InvalidPercentEncoding);
        };

        let byte = (hi << 4) | lo;
        if is_uri_reserved(byte) {
            decoded.extend_from_slice(&bytes[i..i + 3]);
        } else {
            decoded.push(byte);
        }
        i += 3;
    }

    String::from_utf8(decoded)
        .map(Cow::Owned)
        .map_err(|_| ParseError::InvalidUtf8)
}

/// Like [`decode_uri`], but returns the input unchanged when it cannot be decoded.
pub fn decode_uri_lossy(input: &str) -> Cow<'_, str> {
    decode_uri(input).unwrap_or(Cow::Borrowed(input))
}
