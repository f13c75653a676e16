//! Expectation helpers used inside koan step bodies.
//!
//! Each helper returns an assertion error with an expected-vs-actual
//! rendering when the expectation is not met. Anything else that goes
//! wrong inside a step (scratch-file I/O and the like) is propagated with
//! `?` and classified as a fault instead.

use std::fmt::Debug;

/// Why a step's action did not complete normally.
#[derive(Debug)]
pub enum StepError {
    /// An explicit expectation was not met.
    Assertion(String),
    /// Any other error raised while the action ran.
    Fault(anyhow::Error),
}

impl From<anyhow::Error> for StepError {
    fn from(err: anyhow::Error) -> Self {
        StepError::Fault(err)
    }
}

/// Expect `condition` to hold.
pub fn expect_true(condition: bool, message: &str) -> Result<(), StepError> {
    if condition {
        Ok(())
    } else {
        Err(StepError::Assertion(format!("expected true: {message}")))
    }
}

/// Expect `condition` not to hold.
pub fn expect_false(condition: bool, message: &str) -> Result<(), StepError> {
    if condition {
        Err(StepError::Assertion(format!("expected false: {message}")))
    } else {
        Ok(())
    }
}

/// Expect `actual` to equal `expected`.
pub fn expect_eq<T: Debug + PartialEq>(expected: T, actual: T) -> Result<(), StepError> {
    if expected == actual {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected {expected:?}, got {actual:?}"
        )))
    }
}

/// Expect `actual` to differ from `unexpected`.
pub fn expect_ne<T: Debug + PartialEq>(unexpected: T, actual: T) -> Result<(), StepError> {
    if unexpected == actual {
        Err(StepError::Assertion(format!(
            "expected anything but {unexpected:?}"
        )))
    } else {
        Ok(())
    }
}
