//! Test-only helpers for constructing deterministic synthetic groups.

use anyhow::anyhow;

use crate::assertions::StepError;
use crate::group::{Group, Step};

/// Action that always passes.
pub fn pass() -> Result<(), StepError> {
    Ok(())
}

/// Action that always fails its expectation.
pub fn fail() -> Result<(), StepError> {
    Err(StepError::Assertion("expected 1, got 2".to_string()))
}

/// Action that always faults.
pub fn fault() -> Result<(), StepError> {
    Err(StepError::Fault(anyhow!("scratch dir vanished")))
}

/// A passing step with the given order.
pub fn passing_step(order: u32, name: &'static str) -> Step {
    Step {
        order,
        name,
        action: pass,
    }
}

/// A step whose expectation is never met.
pub fn failing_step(order: u32, name: &'static str) -> Step {
    Step {
        order,
        name,
        action: fail,
    }
}

/// A step that always hits an unexpected error.
pub fn faulting_step(order: u32, name: &'static str) -> Step {
    Step {
        order,
        name,
        action: fault,
    }
}

/// A group from pre-built steps, declaration order as given.
pub fn group_with(name: &'static str, steps: Vec<Step>) -> Group {
    Group { name, steps }
}

/// A group of `count` passing steps ordered `1..=count`.
pub fn passing_group(name: &'static str, count: u32) -> Group {
    let steps = (1..=count).map(|order| passing_step(order, "step")).collect();
    group_with(name, steps)
}
