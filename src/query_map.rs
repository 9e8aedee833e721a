use core::convert::Infallible;

use crate::compat::{Cow, String, ToString, Vec};
use crate::error::Result;
use crate::parser::Parseable;
use crate::unicode::percent_encode::{decode_uri, decode_uri_lossy, encode_uri_into};

/// One value slot of a query key.
///
/// `None` is a bare key (`key`), `Some("")` an explicit empty value (`key=`).
pub type QueryValue = Option<String>;

/// Conversion into a [`QueryValue`], so values can be passed as `&str`,
/// `String` or an explicit `Option`.
pub trait IntoQueryValue {
    fn into_query_value(self) -> QueryValue;
}

impl IntoQueryValue for &str {
    fn into_query_value(self) -> QueryValue {
        Some(self.to_string())
    }
}

impl IntoQueryValue for String {
    fn into_query_value(self) -> QueryValue {
        Some(self)
    }
}

impl IntoQueryValue for &String {
    fn into_query_value(self) -> QueryValue {
        Some(self.clone())
    }
}

impl IntoQueryValue for Option<&str> {
    fn into_query_value(self) -> QueryValue {
        self.map(ToString::to_string)
    }
}

impl IntoQueryValue for Option<String> {
    fn into_query_value(self) -> QueryValue {
        self
    }
}

impl IntoQueryValue for &Option<String> {
    fn into_query_value(self) -> QueryValue {
        self.clone()
    }
}

/// A key and its values, in append order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryEntry {
    pub key: String,
    pub values: Vec<QueryValue>,
}

/// Query string as an ordered multi-map.
///
/// Keys are unique and keep the order in which they were first introduced;
/// each key holds a list of values in append order. Serializing with
/// [`QueryMap::build`] emits every value of a key together, so
/// `a=1&b=2&a=3` parses and rebuilds as `a=1&a=3&b=2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<QueryEntry>,
}

/// What [`QueryMap::merge`] reads from: another map, or a query string
/// that is parsed first.
#[derive(Debug, Clone, Copy)]
pub enum MergeSource<'a> {
    Map(&'a QueryMap),
    Query(&'a str),
}

impl<'a> From<&'a QueryMap> for MergeSource<'a> {
    fn from(map: &'a QueryMap) -> Self {
        Self::Map(map)
    }
}

impl<'a> From<&'a str> for MergeSource<'a> {
    fn from(query: &'a str) -> Self {
        Self::Query(query)
    }
}

impl<'a> From<&'a String> for MergeSource<'a> {
    fn from(query: &'a String) -> Self {
        Self::Query(query)
    }
}

fn decode_lenient(input: &str) -> core::result::Result<Cow<'_, str>, Infallible> {
    Ok(decode_uri_lossy(input))
}

impl QueryMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Pairs are split on `&`, empty pairs skipped, and each pair split on its
    /// first `=`. A pair without `=` adds an absent value. Keys and values are
    /// percent-decoded; a component that cannot be decoded is kept as written.
    pub fn parse(query: &str) -> Self {
        match Self::parse_with(query, decode_lenient) {
            Ok(map) => map,
            Err(never) => match never {},
        }
    }

    /// Parse a query string, failing on components that cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPercentEncoding`](crate::ParseError::InvalidPercentEncoding)
    /// for a malformed escape and [`ParseError::InvalidUtf8`](crate::ParseError::InvalidUtf8)
    /// when decoded bytes are not UTF-8.
    pub fn try_parse(query: &str) -> Result<Self> {
        Self::parse_with(query, decode_uri)
    }

    fn parse_with<E>(
        query: &str,
        decode: impl Fn(&str) -> core::result::Result<Cow<'_, str>, E>,
    ) -> core::result::Result<Self, E> {
        let mut map = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => {
                    let key = decode(key)?;
                    let value = decode(value)?.into_owned();
                    map.add(&key, [value]);
                }
                None => {
                    map.add(&decode(pair)?, [None::<String>]);
                }
            }
        }

        Ok(map)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Number of distinct keys, not of values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `key` in insertion order
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// All values of `key`, or `None` if the key is missing.
    /// A present key may have an empty list.
    pub fn get(&self, key: &str) -> Option<&[QueryValue]> {
        self.index_of(key).and_then(|index| self.get_by_index(index))
    }

    /// Values of the entry at `index`, or `None` if out of range
    pub fn get_by_index(&self, index: usize) -> Option<&[QueryValue]> {
        self.entries.get(index).map(|entry| entry.values.as_slice())
    }

    /// First value of `key`.
    ///
    /// `None` when the key is missing or has no values, `Some(None)` when the
    /// first value is absent (a bare key).
    pub fn single(&self, key: &str) -> Option<Option<&str>> {
        self.get(key)?.first().map(Option::as_deref)
    }

    /// Replace the values of `key`, or append a new entry if it is missing.
    /// An empty `values` leaves the key present with no values.
    pub fn set<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoQueryValue,
    {
        let values: Vec<QueryValue> = values
            .into_iter()
            .map(IntoQueryValue::into_query_value)
            .collect();

        match self.index_of(key) {
            Some(index) => self.entries[index].values = values,
            None => self.entries.push(QueryEntry {
                key: key.to_string(),
                values,
            }),
        }
        self
    }

    /// Append values to `key`, or append a new entry if it is missing
    pub fn add<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoQueryValue,
    {
        match self.index_of(key) {
            Some(index) => self.entries[index]
                .values
                .extend(values.into_iter().map(IntoQueryValue::into_query_value)),
            None => {
                self.set(key, values);
            }
        }
        self
    }

    /// Remove `key` and all its values. The other entries keep their order.
    pub fn drop(&mut self, key: &str) -> &mut Self {
        self.entries.retain(|entry| entry.key != key);
        self
    }

    /// Merge another map or query string into this one, key by key in the
    /// other's order.
    ///
    /// Without `replace`, values are appended (`add`). With `replace`, values
    /// overwrite (`set`), and a key with no values in `other` is dropped.
    pub fn merge<'a>(&mut self, other: impl Into<MergeSource<'a>>, replace: bool) -> &mut Self {
        let parsed;
        let other = match other.into() {
            MergeSource::Map(map) => map,
            MergeSource::Query(query) => {
                parsed = Self::parse(query);
                &parsed
            }
        };

        for entry in &other.entries {
            if entry.values.is_empty() {
                if replace {
                    self.drop(&entry.key);
                }
            } else if replace {
                self.set(&entry.key, &entry.values);
            } else {
                self.add(&entry.key, &entry.values);
            }
        }
        self
    }

    /// Remove all entries
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[QueryEntry] {
        &self.entries
    }

    /// Iterate over keys with their value lists
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[QueryValue])> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.values.as_slice()))
    }

    /// Iterate over every key/value pair in serialization order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .values
                .iter()
                .map(move |value| (entry.key.as_str(), value.as_deref()))
        })
    }

    /// Serialize to a query string without the leading `?`.
    /// Absent values emit the bare key. An empty map gives an empty string.
    pub fn build(&self) -> String {
        let mut result = String::new();
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                result.push('&');
            }
            encode_uri_into(&mut result, key);
            if let Some(value) = value {
                result.push('=');
                encode_uri_into(&mut result, value);
            }
        }
        result
    }
}

impl Parseable for QueryMap {
    fn parse(input: &str) -> Self {
        Self::parse(input)
    }

    fn try_parse(input: &str) -> Result<Self> {
        Self::try_parse(input)
    }
}

impl core::fmt::Display for QueryMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<&str> for QueryMap {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryMap {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: AsRef<str>,
    V: IntoQueryValue,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for QueryMap
where
    K: AsRef<str>,
    V: IntoQueryValue,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key.as_ref(), [value]);
        }
    }
}
