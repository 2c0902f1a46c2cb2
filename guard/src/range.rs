//! Closed-interval guard.

use std::fmt::Display;

use crate::error::{ArgumentError, Result, ViolationKind, messages};

/// Fail unless `low <= value <= high`.
///
/// Both ends are inclusive. An inverted interval (`low > high`) contains
/// nothing, so every value is rejected.
pub fn reject_value_outside_range<T>(value: T, low: T, high: T, param_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value < low || value > high {
        return Err(ArgumentError::new(
            ViolationKind::Range,
            param_name,
            messages::outside_range(low, high),
        ));
    }
    Ok(())
}
