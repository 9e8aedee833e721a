use super::State;
use super::authority::parse_authority;
use crate::character_sets::is_word_byte;
use crate::helpers::{find_path_end, prune_fragment};
use crate::url_components::UrlComponents;

/// Byte offset of the `:` that ends a scheme.
///
/// A scheme starts with a word byte and spans at least two characters, so the
/// first `:` at offset 2 or later closes it. A `:` at offset 1 belongs to the
/// scheme text.
fn find_scheme_end(bytes: &[u8]) -> Option<usize> {
    if !bytes.first().is_some_and(|&b| is_word_byte(b)) {
        return None;
    }
    bytes
        .get(2..)
        .and_then(|rest| memchr::memchr(b':', rest))
        .map(|pos| pos + 2)
}

/// Split a URL string into its component slices.
///
/// Never fails: anything the scanner cannot place ends up in the path, and
/// missing components stay empty.
pub fn parse_components(input: &str) -> UrlComponents<'_> {
    let bytes = input.as_bytes();
    let mut components = UrlComponents::new();
    let mut state = State::SchemeStart;
    let mut pointer = 0;

    loop {
        match state {
            State::SchemeStart => {
                if let Some(end) = find_scheme_end(bytes) {
                    components.scheme = &input[..end];
                    pointer = end + 1;
                }
                state = State::AuthorityStart;
            }

            State::AuthorityStart => {
                state = if input[pointer..].starts_with("//") {
                    State::Authority
                } else {
                    State::Path
                };
            }

            State::Authority => {
                // Without a host the "//" stays in the path
                if let Some(authority) = parse_authority(input, pointer + 2) {
                    components.user = authority.user;
                    components.password = authority.password;
                    components.host = authority.host;
                    components.port = authority.port;
                    pointer = authority.end;
                }
                state = State::Path;
            }

            State::Path => {
                let rest = &input[pointer..];
                let Some(end) = find_path_end(rest) else {
                    components.path = rest;
                    break;
                };
                components.path = &rest[..end];
                state = if bytes[pointer + end] == b'?' {
                    State::Query
                } else {
                    State::Fragment
                };
                pointer += end + 1;
            }

            State::Query => {
                let (query, fragment) = prune_fragment(&input[pointer..]);
                components.query = Some(query);
                if fragment.is_none() {
                    break;
                }
                pointer += query.len() + 1;
                state = State::Fragment;
            }

            State::Fragment => {
                components.hash = &input[pointer..];
                break;
            }
        }
    }

    components
}
