//! String utility functions.
//!
//! These helpers back the default label derivation of generated form
//! fields: a column named `first_name` is presented as `First Name` unless
//! the view configuration overrides it.

/// Capitalizes the first character of a string.
///
/// # Examples
///
/// ```
/// use databrowser_rs_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("hello"), "Hello");
/// assert_eq!(capfirst(""), "");
/// assert_eq!(capfirst("HELLO"), "HELLO");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Turns an attribute name into a human-readable label.
///
/// Underscores become spaces and each word is capitalized.
///
/// # Examples
///
/// ```
/// use databrowser_rs_core::utils::text::prettify_name;
///
/// assert_eq!(prettify_name("first_name"), "First Name");
/// assert_eq!(prettify_name("email"), "Email");
/// ```
pub fn prettify_name(name: &str) -> String {
    name.split('_')
        .map(capfirst)
        .collect::<Vec<_>>()
        .join(" ")
}
