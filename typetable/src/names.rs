//! Display names for column types.
//!
//! Headers are built from [`std::any::type_name`], which spells out full module paths
//! (`alloc::string::String`). [`pretty_type_name`] shortens those paths to their last segment.
//! The output is meant for people reading diagnostics; it is not guaranteed to be unique or
//! stable across compiler versions.

/// The shortened name of `T`, as used for table headers.
pub fn type_header<T: ?Sized>() -> String {
    pretty_type_name(std::any::type_name::<T>())
}

/// Strips module paths from every path in a type name, keeping generic arguments, references,
/// tuples, arrays and lifetimes as they are.
///
/// ```
/// use typetable::names::pretty_type_name;
///
/// assert_eq!(
///     pretty_type_name("core::option::Option<alloc::vec::Vec<u8>>"),
///     "Option<Vec<u8>>"
/// );
/// ```
pub fn pretty_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    // Start of the path currently being written to `out`.
    let mut path_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            if out.len() > path_start {
                out.truncate(path_start);
            } else {
                // `<T as Trait>::Assoc` and leading `::` keep their separator.
                out.push_str("::");
                path_start = out.len();
            }
        } else if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push(c);
            path_start = out.len();
        }
    }

    out
}
