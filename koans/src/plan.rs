//! Discovery: validate group declarations and assemble the run plan.

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::group::{Group, Step};

/// One plan entry: a step together with its owning group's name.
#[derive(Debug, Clone, Copy)]
pub struct PlannedStep {
    pub group: &'static str,
    pub step: Step,
}

/// The full ordered sequence of steps for one invocation.
///
/// Groups appear in declaration order; steps within a group ascend by
/// `order`. Immutable once built.
#[derive(Debug, Clone)]
pub struct RunPlan {
    steps: Vec<PlannedStep>,
}

impl RunPlan {
    /// Validate declarations and build the plan.
    ///
    /// All configuration violations are collected and reported together;
    /// no step runs when any are present.
    pub fn build(groups: Vec<Group>) -> Result<Self> {
        let errors = validate_groups(&groups);
        if !errors.is_empty() {
            bail!("configuration errors:\n- {}", errors.join("\n- "));
        }

        let mut steps = Vec::new();
        for mut group in groups {
            group.steps.sort_by_key(|step| step.order);
            for step in group.steps {
                steps.push(PlannedStep {
                    group: group.name,
                    step,
                });
            }
        }
        Ok(RunPlan { steps })
    }

    pub fn steps(&self) -> &[PlannedStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Check declaration invariants the type system cannot express:
/// unique group names, positive step orders, unique orders per group.
fn validate_groups(groups: &[Group]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut group_names = HashSet::new();
    for group in groups {
        if !group_names.insert(group.name) {
            errors.push(format!("duplicate group name '{}'", group.name));
        }
        let mut orders = HashSet::new();
        for step in &group.steps {
            if step.order == 0 {
                errors.push(format!("{}/{}: order must be > 0", group.name, step.name));
            }
            if !orders.insert(step.order) {
                errors.push(format!(
                    "{}: duplicate step order {} at '{}'",
                    group.name, step.order, step.name
                ));
            }
        }
    }
    errors
}
