//! Three-valued step outcome and its classification.

use serde::Serialize;

use crate::assertions::StepError;

/// Result of running one step's action.
///
/// Assertion failures and faults have identical control-flow effect (the
/// run halts); only their rendering differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The action completed normally.
    Passed,
    /// An explicit expectation was not met.
    Failed { reason: String },
    /// The action hit an error unrelated to its expectation.
    Faulted { cause: String },
}

impl StepOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, StepOutcome::Passed)
    }

    /// The reason shown to the learner for a non-pass.
    pub fn reason(&self) -> Option<String> {
        match self {
            StepOutcome::Passed => None,
            StepOutcome::Failed { reason } => Some(reason.clone()),
            StepOutcome::Faulted { cause } => Some(format!("fault: {cause}")),
        }
    }
}

/// Classify an action result into the outcome consumed by the reporter.
pub fn classify(result: Result<(), StepError>) -> StepOutcome {
    match result {
        Ok(()) => StepOutcome::Passed,
        Err(StepError::Assertion(reason)) => StepOutcome::Failed { reason },
        Err(StepError::Fault(cause)) => StepOutcome::Faulted {
            cause: format!("{cause:#}"),
        },
    }
}
