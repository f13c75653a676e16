//! Step and group declarations.
//!
//! Groups are built through an explicit registry: each lesson declares its
//! `(order, name, action)` tuples at startup. The declaration is the
//! registry; nothing is discovered by reflection.

use crate::assertions::StepError;

/// A step action: a zero-argument check that either completes normally or
/// reports why it could not.
pub type Action = fn() -> Result<(), StepError>;

/// One ordered, independently executable check.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Execution position within the owning group. Positive, unique per group.
    pub order: u32,
    /// Identifier, `snake_case`.
    pub name: &'static str,
    pub action: Action,
}

impl Step {
    /// Human-readable label derived from the identifier.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// A named lesson topic: an ordered collection of steps.
#[derive(Debug, Clone)]
pub struct Group {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

impl Group {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Declare a step. Declaration order is preserved; execution order is
    /// resolved from `order` at discovery.
    #[must_use]
    pub fn step(mut self, order: u32, name: &'static str, action: Action) -> Self {
        self.steps.push(Step {
            order,
            name,
            action,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pass;

    #[test]
    fn builder_preserves_declaration_order() {
        let group = Group::new("lesson")
            .step(2, "second", pass)
            .step(1, "first", pass);
        let names: Vec<&str> = group.steps.iter().map(|step| step.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn display_name_is_derived_from_identifier() {
        let group = Group::new("lesson").step(1, "assert_truth_with_message", pass);
        assert_eq!(group.steps[0].display_name(), "assert truth with message");
    }
}
