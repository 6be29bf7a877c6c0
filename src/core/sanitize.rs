//! Log-injection guard
//!
//! Every piece of user-supplied or externally-sourced text goes through
//! [`sanitize`] before it is written to a log sink, so one message can never
//! forge extra log lines.

use lazy_regex::regex;
use std::borrow::Cow;

/// Replaces CR, LF, TAB and every C0/C1 control character with a single space.
///
/// The output has exactly as many characters as the input.
///
/// # Example
///
/// ```
/// use formbot::core::sanitize::sanitize;
///
/// assert_eq!(sanitize("line1\nline2"), "line1 line2");
/// assert_eq!(sanitize(""), "");
/// ```
pub fn sanitize(text: &str) -> Cow<'_, str> {
    regex!(r"[\r\n\t\x00-\x1f\x7f-\x9f]").replace_all(text, " ")
}

/// Optional variant: `None` stays `None`.
pub fn sanitize_opt(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(sanitize)
}

/// Sanitizes an optional field, rendering `placeholder` when it is absent or empty.
pub fn sanitize_or<'a>(text: Option<&'a str>, placeholder: &'a str) -> Cow<'a, str> {
    match text {
        Some(value) if !value.is_empty() => sanitize(value),
        _ => Cow::Borrowed(placeholder),
    }
}
