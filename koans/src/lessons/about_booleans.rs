//! The `bool` type has exactly two values, `true` and `false`. Nothing
//! else converts to it implicitly.

use crate::assertions::{StepError, expect_eq, expect_false, expect_true};
use crate::group::Group;

pub fn group() -> Group {
    Group::new("about booleans")
        .step(1, "true_is_treated_as_true", true_is_treated_as_true)
        .step(2, "false_is_treated_as_false", false_is_treated_as_false)
        .step(3, "true_is_not_false", true_is_not_false)
        .step(4, "comparisons_produce_booleans", comparisons_produce_booleans)
        .step(
            5,
            "logical_operators_combine_booleans",
            logical_operators_combine_booleans,
        )
}

fn true_is_treated_as_true() -> Result<(), StepError> {
    expect_true(1 == 1, "truth is true")
}

fn false_is_treated_as_false() -> Result<(), StepError> {
    expect_false("a" == "b", "distinct strings are equal")
}

fn true_is_not_false() -> Result<(), StepError> {
    expect_false(!true, "negated truth")
}

/// Comparison operators evaluate to `bool`; there is no truthiness.
fn comparisons_produce_booleans() -> Result<(), StepError> {
    let answer = 3 < 5;
    expect_eq(true, answer)
}

/// `&&` and `||` combine booleans and short-circuit.
fn logical_operators_combine_booleans() -> Result<(), StepError> {
    expect_true(true && !false, "conjunction of truths")?;
    expect_true(false || true, "at least one truth")
}
