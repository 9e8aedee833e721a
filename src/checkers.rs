/// Check if a string is a non-empty run of ASCII digits, the only port form
/// the component scanner accepts.
pub fn is_port(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if !is_port(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
