//! String guards.
//!
//! Whitespace means Unicode whitespace as reported by [`char::is_whitespace`].

use crate::error::{ArgumentError, Result, ViolationKind, messages};

fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Fail if the string is missing or has zero length. Whitespace-only passes.
pub fn reject_null_or_empty_string<'a>(value: Option<&'a str>, param_name: &str) -> Result<&'a str> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ArgumentError::new(
            ViolationKind::Emptiness,
            param_name,
            messages::NULL_OR_EMPTY_STRING,
        )),
    }
}

/// Fail if the string is missing, empty, or only whitespace.
pub fn reject_null_or_whitespace_string<'a>(
    value: Option<&'a str>,
    param_name: &str,
) -> Result<&'a str> {
    match value {
        Some(text) if !is_blank(text) => Ok(text),
        _ => Err(ArgumentError::new(
            ViolationKind::Emptiness,
            param_name,
            messages::NULL_OR_WHITESPACE_STRING,
        )),
    }
}

/// Fail if a present string is empty or only whitespace.
///
/// Absence is accepted; this is the check for optional parameters where a
/// supplied value must still carry content.
pub fn reject_empty_or_whitespace_string<'a>(
    value: Option<&'a str>,
    param_name: &str,
) -> Result<Option<&'a str>> {
    match value {
        Some(text) if is_blank(text) => Err(ArgumentError::new(
            ViolationKind::Emptiness,
            param_name,
            messages::EMPTY_OR_WHITESPACE_STRING,
        )),
        other => Ok(other),
    }
}
