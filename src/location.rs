use crate::compat::{Cow, String};

/// Source of the URL a host environment currently has loaded.
///
/// The crate never reads ambient state itself; [`UrlParts::current`](crate::UrlParts::current)
/// asks an implementation of this trait instead. An environment with nothing
/// loaded reports an empty string.
pub trait Location {
    /// The current URL as a string
    fn href(&self) -> Cow<'_, str>;
}

impl Location for str {
    fn href(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Location for String {
    fn href(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: Location + ?Sized> Location for &T {
    fn href(&self) -> Cow<'_, str> {
        (**self).href()
    }
}

/// [`Location`] backed by a closure, see [`location_fn`]
#[derive(Debug, Clone, Copy)]
pub struct LocationFn<F>(F);

impl<F> Location for LocationFn<F>
where
    F: Fn() -> String,
{
    fn href(&self) -> Cow<'_, str> {
        Cow::Owned((self.0)())
    }
}

/// Wrap a closure returning the current URL as a [`Location`]
pub fn location_fn<F>(f: F) -> LocationFn<F>
where
    F: Fn() -> String,
{
    LocationFn(f)
}
