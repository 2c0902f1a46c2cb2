//! Which guards treat a missing value as valid and which reject it.

use argsentry::{
    ViolationKind, reject_collection_with_values_at_or_below, reject_empty_or_whitespace_string,
    reject_null_object, reject_null_or_empty_collection, reject_null_or_empty_read_only_collection,
    reject_null_or_empty_string, reject_null_or_whitespace_string,
};

use crate::common::assert_violation;

#[test]
fn values_at_or_below_skips_missing_collection() {
    assert!(reject_collection_with_values_at_or_below(None::<&Vec<i32>>, 3, "obj").is_ok());
}

#[test]
fn null_or_empty_collection_rejects_missing_collection() {
    assert_violation(
        reject_null_or_empty_collection(None::<&Vec<String>>, "obj"),
        ViolationKind::Emptiness,
        "Collection cannot be null or empty.",
        "obj",
    );
    assert_violation(
        reject_null_or_empty_read_only_collection::<String>(None, "obj"),
        ViolationKind::Emptiness,
        "Collection cannot be null or empty.",
        "obj",
    );
}

#[test]
fn empty_or_whitespace_skips_missing_string() {
    assert_eq!(reject_empty_or_whitespace_string(None, "obj"), Ok(None));
}

#[test]
fn null_or_empty_string_rejects_missing_string() {
    assert_violation(
        reject_null_or_empty_string(None, "obj"),
        ViolationKind::Emptiness,
        "Value cannot be null or empty.",
        "obj",
    );
}

#[test]
fn null_or_whitespace_string_rejects_missing_string() {
    assert_violation(
        reject_null_or_whitespace_string(None, "obj"),
        ViolationKind::Emptiness,
        "Value cannot be null, empty, or white space.",
        "obj",
    );
}

#[test]
fn null_object_is_the_only_null_kind() {
    let err = assert_violation(
        reject_null_object(None::<u32>, "obj"),
        ViolationKind::Null,
        "Value cannot be null.",
        "obj",
    );
    assert!(err.is_null());
}

#[test]
fn owned_strings_go_through_as_deref() {
    let configured: Option<String> = Some("  ".to_string());
    assert!(reject_null_or_empty_string(configured.as_deref(), "configured").is_ok());
    assert!(reject_null_or_whitespace_string(configured.as_deref(), "configured").is_err());
    assert!(reject_empty_or_whitespace_string(configured.as_deref(), "configured").is_err());
}
