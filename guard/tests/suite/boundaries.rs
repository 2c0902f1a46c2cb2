//! Boundary equality and interval inclusivity.

use argsentry::{
    ViolationKind, reject_greater_than, reject_greater_than_or_equal_to, reject_less_than,
    reject_less_than_or_equal_to, reject_value_outside_range,
};

use crate::common::assert_violation;

#[test]
fn equality_passes_strict_checks() {
    assert!(reject_greater_than(5, 5, "obj").is_ok());
    assert!(reject_less_than(5, 5, "obj").is_ok());
}

#[test]
fn equality_fails_or_equal_to_checks() {
    assert_violation(
        reject_greater_than_or_equal_to(5, 5, "obj"),
        ViolationKind::Range,
        "Value must be less than 5.",
        "obj",
    );
    assert_violation(
        reject_less_than_or_equal_to(5, 5, "obj"),
        ViolationKind::Range,
        "Value must be greater than 5.",
        "obj",
    );
}

#[test]
fn crossing_the_bound_names_the_valid_side() {
    assert_violation(
        reject_greater_than(6, 5, "obj"),
        ViolationKind::Range,
        "Value must be less than or equal to 5.",
        "obj",
    );
    assert_violation(
        reject_less_than(4, 5, "obj"),
        ViolationKind::Range,
        "Value must be greater than or equal to 5.",
        "obj",
    );
}

#[test]
fn range_is_closed_on_both_ends() {
    assert!(reject_value_outside_range(1, 1, 10, "obj").is_ok());
    assert!(reject_value_outside_range(10, 1, 10, "obj").is_ok());

    for value in [0, 11] {
        assert_violation(
            reject_value_outside_range(value, 1, 10, "obj"),
            ViolationKind::Range,
            "Value outside of specified range; 1 - 10.",
            "obj",
        );
    }
}

#[test]
fn checks_are_repeatable() {
    let first = reject_value_outside_range(42_u32, 1, 10, "obj");
    let second = reject_value_outside_range(42_u32, 1, 10, "obj");
    assert_eq!(first, second);
}
