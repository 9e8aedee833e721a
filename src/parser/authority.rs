use crate::helpers::{digits_len, host_len, host_starts_at};

/// An authority section matched right after `//`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    pub user: &'a str,
    pub password: &'a str,
    pub host: &'a str,
    pub port: &'a str,
    /// Input offset just past the authority, including one trailing `/`
    pub end: usize,
}

/// Userinfo boundaries: (`user_end`, `password_range`, `host_start`)
type Userinfo = (usize, Option<(usize, usize)>, usize);

/// Find the userinfo that leaves a non-empty host behind it.
///
/// The user is the shortest run (at least one character) after which either
/// `:password@` or `@` follows a valid host start. For each candidate user end
/// the password form is tried first, with the shortest password that works.
fn find_userinfo(bytes: &[u8], start: usize) -> Option<Userinfo> {
    let first = start + 1;
    if first >= bytes.len() {
        return None;
    }

    for offset in memchr::memchr2_iter(b':', b'@', &bytes[first..]) {
        let user_end = first + offset;
        if bytes[user_end] == b'@' {
            if host_starts_at(bytes, user_end + 1) {
                return Some((user_end, None, user_end + 1));
            }
            continue;
        }

        let password_start = user_end + 1;
        let search_from = password_start + 1;
        if search_from >= bytes.len() {
            continue;
        }
        let at = memchr::memchr_iter(b'@', &bytes[search_from..])
            .map(|pos| search_from + pos)
            .find(|&at| host_starts_at(bytes, at + 1));
        if let Some(at) = at {
            return Some((user_end, Some((password_start, at)), at + 1));
        }
    }

    None
}

/// Match an authority section starting at byte `start` (just after `//`).
///
/// Returns `None` when no non-empty host can be found, in which case the
/// caller treats the `//` as part of the path.
pub fn parse_authority(input: &str, start: usize) -> Option<Authority<'_>> {
    let bytes = input.as_bytes();

    let (user, password, host_start) = match find_userinfo(bytes, start) {
        Some((user_end, password, host_start)) => {
            let password = password.map_or("", |(from, to)| &input[from..to]);
            (&input[start..user_end], password, host_start)
        }
        None => ("", "", start),
    };

    let host_end = host_start + host_len(&input[host_start..]);
    if host_end == host_start {
        return None;
    }
    let host = &input[host_start..host_end];

    let mut end = host_end;
    let mut port = "";
    if bytes.get(end) == Some(&b':') {
        let digits = digits_len(&input[end + 1..]);
        if digits > 0 {
            port = &input[end + 1..end + 1 + digits];
            end += 1 + digits;
        }
    }

    if bytes.get(end) == Some(&b'/') {
        end += 1;
    }

    Some(Authority {
        user,
        password,
        host,
        port,
        end,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn authority(input: &str) -> Option<Authority<'_>> {
        parse_authority(input, 0)
    }

    #[test]
    fn test_host_only() {
        let auth = authority("example.com").unwrap();
        assert_eq!(auth.host, "example.com");
        assert_eq!(auth.user, "");
        assert_eq!(auth.port, "");
        assert_eq!(auth.end, 11);
    }

    #[test]
    fn test_host_port_and_slash() {
        let auth = authority("example.com:8080/path").unwrap();
        assert_eq!(auth.host, "example.com");
        assert_eq!(auth.port, "8080");
        assert_eq!(auth.end, 17);
    }

    #[test]
    fn test_only_one_slash_consumed() {
        let auth = authority("example.com//path").unwrap();
        assert_eq!(auth.end, 12);
    }

    #[test]
    fn test_port_needs_digits() {
        let auth = authority("example.com:abc").unwrap();
        assert_eq!(auth.host, "example.com");
        assert_eq!(auth.port, "");
        assert_eq!(auth.end, 11);

        let auth = authority("example.com:80abc").unwrap();
        assert_eq!(auth.port, "80");
        assert_eq!(auth.end, 14);
    }

    #[test]
    fn test_user_and_password() {
        let auth = authority("user:pass@example.com:4080/").unwrap();
        assert_eq!(auth.user, "user");
        assert_eq!(auth.password, "pass");
        assert_eq!(auth.host, "example.com");
        assert_eq!(auth.port, "4080");
        assert_eq!(auth.end, 27);
    }

    #[test]
    fn test_user_without_password() {
        let auth = authority("user@example.com").unwrap();
        assert_eq!(auth.user, "user");
        assert_eq!(auth.password, "");
        assert_eq!(auth.host, "example.com");
    }

    #[test]
    fn test_shortest_user_wins() {
        let auth = authority("a@b@c").unwrap();
        assert_eq!(auth.user, "a");
        assert_eq!(auth.host, "b@c");
    }

    #[test]
    fn test_password_skips_at_without_host() {
        // The first '@' is followed by '/', so the password runs to the second one
        let auth = authority("u:p@/x@host").unwrap();
        assert_eq!(auth.user, "u");
        assert_eq!(auth.password, "p@/x");
        assert_eq!(auth.host, "host");
    }

    #[test]
    fn test_user_may_contain_slash() {
        let auth = authority("host/path@other").unwrap();
        assert_eq!(auth.user, "host/path");
        assert_eq!(auth.host, "other");
    }

    #[test]
    fn test_empty_password_is_part_of_user() {
        // A password needs at least one character
        let auth = authority("user:@example.com").unwrap();
        assert_eq!(auth.user, "user:");
        assert_eq!(auth.password, "");
        assert_eq!(auth.host, "example.com");
    }

    #[test]
    fn test_host_keeps_query_characters() {
        let auth = authority("example.com?q=1#h").unwrap();
        assert_eq!(auth.host, "example.com?q=1#h");
    }

    #[test]
    fn test_no_host() {
        assert_eq!(authority(""), None);
        assert_eq!(authority("/path"), None);
        assert_eq!(authority(":80"), None);
    }

    #[test]
    fn test_failed_userinfo_falls_back_to_host() {
        // No '@' is followed by a host, so the host run starts at the beginning
        let auth = authority("user@/path").unwrap();
        assert_eq!(auth.user, "");
        assert_eq!(auth.host, "user@");
        assert_eq!(auth.end, 6);
    }

    #[test]
    fn test_offset_start() {
        let auth = parse_authority("http://example.com/", 7).unwrap();
        assert_eq!(auth.host, "example.com");
        assert_eq!(auth.end, 19);
    }
}
