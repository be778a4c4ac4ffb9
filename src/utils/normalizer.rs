//! Token normalization.
//!
//! Drops every character that is not ASCII alphanumeric or an apostrophe and
//! lowercases the rest, so `"Don't!"` and `"don't"` count as the same word.

/// Normalizes a raw whitespace-delimited token.
///
/// # Examples
///
/// ```
/// use word_frequency::utils::normalizer::normalize;
///
/// assert_eq!(normalize("Hello,"), "hello");
/// assert_eq!(normalize("DON'T"), "don't");
/// assert_eq!(normalize("--"), "");
/// ```
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
