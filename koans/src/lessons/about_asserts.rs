//! Be accurate in `expect_true` and `expect_eq` usage.

use crate::assertions::{StepError, expect_eq, expect_true};
use crate::group::Group;

pub fn group() -> Group {
    Group::new("about asserts")
        .step(1, "assert_truth", assert_truth)
        .step(2, "assert_truth_with_message", assert_truth_with_message)
        .step(3, "assert_equality", assert_equality)
        .step(
            4,
            "a_better_way_of_asserting_equality",
            a_better_way_of_asserting_equality,
        )
        .step(5, "fill_in_values", fill_in_values)
}

/// We shall contemplate truth by testing reality, via expectations.
fn assert_truth() -> Result<(), StepError> {
    expect_true(1 == 1, "one equals one")
}

/// Enlightenment may be more easily achieved with appropriate messages.
fn assert_truth_with_message() -> Result<(), StepError> {
    expect_true("a" == "a", "this should be true")
}

/// To understand reality, we must compare our expectations against it.
fn assert_equality() -> Result<(), StepError> {
    let expected = 3;
    let actual = 1 + 1 + 1;
    expect_true(expected == actual, "three ones make three")
}

/// Some ways of asserting equality are better than others: an unmet
/// `expect_eq` shows both values.
fn a_better_way_of_asserting_equality() -> Result<(), StepError> {
    let expected = 3;
    let actual = 1 + 1;
    expect_eq(expected, actual + 1)
}

/// Sometimes you will be asked to fill in the values.
fn fill_in_values() -> Result<(), StepError> {
    expect_eq(2, 1 + 1)
}
