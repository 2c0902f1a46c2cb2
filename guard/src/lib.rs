//! Argument guards.
//!
//! Stateless precondition checks for the entry points of other components.
//! Every check returns `Ok` when the argument satisfies its rule, or an
//! [`ArgumentError`] naming the rule that was broken and the parameter that
//! broke it. Nothing here does IO, logs, or holds state.
//!
//! ```
//! use argsentry::{reject_null_or_whitespace_string, reject_value_outside_range};
//!
//! fn set_volume(device: Option<&str>, level: u8) -> argsentry::Result<()> {
//!     let device = reject_null_or_whitespace_string(device, "device")?;
//!     reject_value_outside_range(level, 0, 100, "level")?;
//!     # let _ = device;
//!     Ok(())
//! }
//!
//! let err = set_volume(Some("speaker"), 150).unwrap_err();
//! assert_eq!(err.message(), "Value outside of specified range; 0 - 100.");
//! assert_eq!(err.param_name(), "level");
//! ```

pub mod collection;
pub mod compare;
pub mod error;
pub mod identity;
pub mod range;
pub mod text;

pub use collection::{
    Collection, reject_collection_with_values_at_or_below, reject_null_or_empty_collection,
    reject_null_or_empty_read_only_collection,
};
pub use compare::{
    reject_greater_than, reject_greater_than_or_equal_to, reject_less_than,
    reject_less_than_or_equal_to,
};
pub use error::{ArgumentError, Result, ViolationExt, ViolationKind, messages};
pub use identity::{reject_empty_identifier, reject_null_object};
pub use range::reject_value_outside_range;
pub use text::{
    reject_empty_or_whitespace_string, reject_null_or_empty_string,
    reject_null_or_whitespace_string,
};
