/// Component scanner states, visited in this order.
/// Any state may be skipped, none is revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Optional `scheme:` prefix
    SchemeStart,
    /// `//` check before the authority
    AuthorityStart,
    /// `user[:password]@host[:port]/`
    Authority,
    /// Everything up to `?` or `#`
    Path,
    /// Everything after `?` up to `#`
    Query,
    /// Everything after `#`
    Fragment,
}
