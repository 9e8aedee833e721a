use crate::character_sets::is_host_delimiter;

/// Find the end of a path: the first `?` or `#`.
/// Uses SIMD-accelerated memchr for the search.
pub fn find_path_end(input: &str) -> Option<usize> {
    memchr::memchr2(b'?', b'#', input.as_bytes())
}

/// Split off the fragment at the first `#`.
/// Returns (`before_hash`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Length of the host run at the start of `input`: every byte up to `/` or `:`
pub fn host_len(input: &str) -> usize {
    memchr::memchr2(b'/', b':', input.as_bytes()).unwrap_or(input.len())
}

/// Check if a non-empty host can start at byte `pos`
pub fn host_starts_at(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos).is_some_and(|&b| !is_host_delimiter(b))
}

/// Length of the run of ASCII digits at the start of `input`
pub fn digits_len(input: &str) -> usize {
    input
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(input.len())
}
