#![cfg_attr(not(feature = "std"), no_std)]
//! Split URL strings into editable parts and put them back together.
//!
//! [`UrlParts`] holds the scheme, credentials, host, port, path and hash of a
//! URL as plain strings, and its query as a [`QueryMap`]: an ordered map from
//! unique keys to lists of optional values.
//!
//! ```
//! use url_parts::UrlParts;
//!
//! let mut url = UrlParts::parse("test.com:4000/index");
//! url.query
//!     .set("bool", [""])
//!     .set("string", ["text"])
//!     .set("array", ["1", "2", "3"]);
//!
//! assert_eq!(
//!     url.build(),
//!     "test.com:4000/index?bool=&string=text&array=1&array=2&array=3"
//! );
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod location;
mod parser;
mod query_map;
mod unicode;
mod url_components;
mod url_parts;

// Public API
pub use error::{ParseError, Result};
pub use location::{Location, LocationFn, location_fn};
pub use parser::{Parseable, parse, try_parse};
pub use query_map::{IntoQueryValue, MergeSource, QueryEntry, QueryMap, QueryValue};
pub use url_parts::UrlParts;

/// Percent-encoding primitives used for query keys, values and the hash
pub mod percent {
    pub use crate::unicode::percent_encode::{
        URI_SET, decode_uri, decode_uri_lossy, encode_uri, encode_uri_into,
    };
}
