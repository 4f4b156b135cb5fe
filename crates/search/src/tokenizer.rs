//! Whitespace tokenizer
//!
//! Records and queries go through the same two functions, so the
//! normalization applied at index time and at query time cannot drift.
//! No stemming or stopword filtering.

/// Normalize a single term (lowercase)
///
/// # Example
///
/// ```
/// use sift_search::tokenizer::normalize;
///
/// assert_eq!(normalize("Hello"), "hello");
/// ```
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
}

/// Tokenize text into searchable terms
///
/// - Lowercase
/// - Split on runs of ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`)
/// - Drop empty terms from leading/trailing whitespace
///
/// Non-ASCII whitespace such as U+00A0 stays inside the term.
///
/// # Example
///
/// ```
/// use sift_search::tokenizer::tokenize;
///
/// let tokens = tokenize("  Hello,   World! ");
/// assert_eq!(tokens, vec!["hello,", "world!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|term| !term.is_empty())
        .map(String::from)
        .collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
