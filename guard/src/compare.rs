//! Single-bound comparison guards.
//!
//! Each message names the side of the bound that is allowed. Equality is the
//! only difference between a check and its `_or_equal_to` sibling:
//! `reject_greater_than(5, 5)` passes, `reject_greater_than_or_equal_to(5, 5)`
//! fails.
//!
//! Values that do not compare (a NaN float) never trip a bound.

use std::fmt::Display;

use crate::error::{ArgumentError, Result, ViolationKind, messages};

fn out_of_range(param_name: &str, message: String) -> ArgumentError {
    ArgumentError::new(ViolationKind::Range, param_name, message)
}

/// Fail if `value > bound`.
pub fn reject_greater_than<T>(value: T, bound: T, param_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value > bound {
        return Err(out_of_range(param_name, messages::at_most(bound)));
    }
    Ok(())
}

/// Fail if `value >= bound`.
pub fn reject_greater_than_or_equal_to<T>(value: T, bound: T, param_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value >= bound {
        return Err(out_of_range(param_name, messages::below(bound)));
    }
    Ok(())
}

/// Fail if `value < bound`.
pub fn reject_less_than<T>(value: T, bound: T, param_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value < bound {
        return Err(out_of_range(param_name, messages::at_least(bound)));
    }
    Ok(())
}

/// Fail if `value <= bound`.
pub fn reject_less_than_or_equal_to<T>(value: T, bound: T, param_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value <= bound {
        return Err(out_of_range(param_name, messages::above(bound)));
    }
    Ok(())
}
