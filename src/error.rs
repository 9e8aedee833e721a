/// Errors reported by the strict `try_parse` entry points.
///
/// The lenient `parse` constructors never fail; they keep any component
/// they cannot decode exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `%` not followed by two hex digits
    InvalidPercentEncoding,
    /// Percent-decoded bytes that do not form valid UTF-8
    InvalidUtf8,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidUtf8 => "Percent-decoded text is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for strict parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
