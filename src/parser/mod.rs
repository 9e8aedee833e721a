mod authority;
mod parse_components;
mod state;

pub use parse_components::parse_components;
pub use state::State;

use crate::error::Result;

/// Trait for types that can be built from a URL or query string
pub trait Parseable: Sized {
    /// Parse leniently. Components that cannot be decoded are kept as written.
    fn parse(input: &str) -> Self;

    /// Parse strictly, reporting components that cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) for a malformed percent escape
    /// or percent-decoded text that is not UTF-8.
    fn try_parse(input: &str) -> Result<Self>;
}

/// Parse a string into any [`Parseable`] type
pub fn parse<T: Parseable>(input: &str) -> T {
    T::parse(input)
}

/// Strictly parse a string into any [`Parseable`] type
///
/// # Errors
///
/// Propagates the error from [`Parseable::try_parse`].
pub fn try_parse<T: Parseable>(input: &str) -> Result<T> {
    T::try_parse(input)
}
