//! Presence and identifier guards.

use crate::error::{ArgumentError, Result, ViolationKind, messages};

/// Unwrap a required value, failing if it is absent.
pub fn reject_null_object<T>(value: Option<T>, param_name: &str) -> Result<T> {
    value.ok_or_else(|| ArgumentError::new(ViolationKind::Null, param_name, messages::NULL_VALUE))
}

/// Fail if the identifier equals its default value.
///
/// For `uuid::Uuid` that is the nil UUID; id newtypes deriving `Default`
/// behave the same way.
pub fn reject_empty_identifier<T>(value: &T, param_name: &str) -> Result<()>
where
    T: Default + PartialEq,
{
    if *value == T::default() {
        return Err(ArgumentError::new(
            ViolationKind::Emptiness,
            param_name,
            messages::EMPTY_VALUE,
        ));
    }
    Ok(())
}
