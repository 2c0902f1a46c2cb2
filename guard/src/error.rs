//! Violation errors shared by every guard.
//!
//! Each check builds its failure through [`ArgumentError::new`], pairing a
//! [`ViolationKind`] with one of the fixed templates in [`messages`] and the
//! caller's parameter name.

use std::fmt;
use std::result::Result as StdResult;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for guard checks.
pub type Result<T, E = ArgumentError> = StdResult<T, E>;

/// Which precondition a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required value was absent.
    Null,
    /// The value was present but had no usable content.
    Emptiness,
    /// The value fell outside an allowed bound or interval.
    Range,
}

impl ViolationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Null => "null",
            ViolationKind::Emptiness => "emptiness",
            ViolationKind::Range => "range",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed guard check.
///
/// `message()` is the bare template text (for example
/// `"Value cannot be null."`); the offending parameter is kept separately in
/// `param_name()`. `Display` joins the two.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}\nParameter name: {param_name}")]
pub struct ArgumentError {
    kind: ViolationKind,
    param_name: String,
    message: String,
}

impl ArgumentError {
    pub(crate) fn new(kind: ViolationKind, param_name: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            param_name: param_name.to_owned(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    #[must_use]
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind == ViolationKind::Null
    }

    #[must_use]
    pub fn is_emptiness(&self) -> bool {
        self.kind == ViolationKind::Emptiness
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        self.kind == ViolationKind::Range
    }
}

/// Opt-in reporting for guard results.
///
/// Checks never log on their own; callers that want a record of rejected
/// arguments chain this onto the result.
pub trait ViolationExt {
    /// Emit a `debug` event for a violation and hand the result back untouched.
    #[must_use]
    fn log_violation(self) -> Self;
}

impl<T> ViolationExt for Result<T> {
    fn log_violation(self) -> Self {
        if let Err(err) = &self {
            tracing::debug!(
                kind = %err.kind,
                param = %err.param_name,
                "argument rejected: {}",
                err.message
            );
        }
        self
    }
}

/// Message templates. These strings are part of the public contract.
pub mod messages {
    use std::fmt::Display;

    pub const NULL_VALUE: &str = "Value cannot be null.";
    pub const EMPTY_VALUE: &str = "Value cannot be empty.";
    pub const NULL_OR_EMPTY_COLLECTION: &str = "Collection cannot be null or empty.";
    pub const NULL_OR_EMPTY_STRING: &str = "Value cannot be null or empty.";
    pub const NULL_OR_WHITESPACE_STRING: &str = "Value cannot be null, empty, or white space.";
    pub const EMPTY_OR_WHITESPACE_STRING: &str = "Value cannot be empty or white space.";

    #[must_use]
    pub fn values_must_exceed(threshold: impl Display) -> String {
        format!("All collection values must be greater than {threshold}.")
    }

    #[must_use]
    pub fn at_most(bound: impl Display) -> String {
        format!("Value must be less than or equal to {bound}.")
    }

    #[must_use]
    pub fn below(bound: impl Display) -> String {
        format!("Value must be less than {bound}.")
    }

    #[must_use]
    pub fn at_least(bound: impl Display) -> String {
        format!("Value must be greater than or equal to {bound}.")
    }

    #[must_use]
    pub fn above(bound: impl Display) -> String {
        format!("Value must be greater than {bound}.")
    }

    #[must_use]
    pub fn outside_range(low: impl Display, high: impl Display) -> String {
        format!("Value outside of specified range; {low} - {high}.")
    }
}
