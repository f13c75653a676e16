//! Runs a plan's steps in order, halting at the first non-pass.

use tracing::debug;

use crate::outcome::{StepOutcome, classify};
use crate::plan::RunPlan;

/// Outcome of one attempted step, tagged with its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub group: &'static str,
    pub name: &'static str,
    pub order: u32,
    pub outcome: StepOutcome,
}

impl StepResult {
    /// Human-readable label derived from the identifier.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// Outcomes for every attempted step, plus the count of steps never
/// attempted. Created once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub attempted: Vec<StepResult>,
    pub remaining: usize,
}

impl RunResult {
    pub fn passed_count(&self) -> usize {
        self.attempted
            .iter()
            .filter(|step| step.outcome.is_pass())
            .count()
    }

    /// The step the run halted at, if any.
    pub fn halted(&self) -> Option<&StepResult> {
        self.attempted.last().filter(|step| !step.outcome.is_pass())
    }

    pub fn is_complete(&self) -> bool {
        self.halted().is_none()
    }

    /// Total number of steps in the plan this result came from.
    pub fn total(&self) -> usize {
        self.attempted.len() + self.remaining
    }
}

/// Execute the plan exactly once, single-threaded, in plan order.
///
/// Stops at the first outcome that is not a pass; later steps are never
/// attempted, regardless of which group they belong to.
pub fn execute(plan: &RunPlan) -> RunResult {
    let mut attempted = Vec::new();
    for (index, planned) in plan.steps().iter().enumerate() {
        debug!(group = planned.group, step = planned.step.name, "running step");
        let outcome = classify((planned.step.action)());
        let halt = !outcome.is_pass();
        attempted.push(StepResult {
            group: planned.group,
            name: planned.step.name,
            order: planned.step.order,
            outcome,
        });
        if halt {
            return RunResult {
                attempted,
                remaining: plan.len() - index - 1,
            };
        }
    }
    RunResult {
        attempted,
        remaining: 0,
    }
}
