//! Renders a run result as learner-facing output and an exit code.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::executor::RunResult;
use crate::exit_codes;
use crate::outcome::StepOutcome;

/// Machine-readable run summary.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    /// Steps still to clear, counting the halting step itself.
    pub remaining: usize,
    pub halted: Option<HaltedStep>,
}

/// Identity and outcome of the step the run halted at.
#[derive(Debug, Serialize)]
pub struct HaltedStep {
    pub group: String,
    pub step: String,
    pub outcome: StepOutcome,
}

pub fn summarize(result: &RunResult) -> Summary {
    let halted = result.halted().map(|step| HaltedStep {
        group: step.group.to_string(),
        step: step.display_name(),
        outcome: step.outcome.clone(),
    });
    Summary {
        total: result.total(),
        passed: result.passed_count(),
        remaining: result.remaining + usize::from(halted.is_some()),
        halted,
    }
}

/// Plain-text report: a success line, or the first thing to fix plus
/// progress counters.
pub fn render(result: &RunResult) -> String {
    let summary = summarize(result);
    match &summary.halted {
        None => format!("all koans pass\npassed={} remaining=0", summary.passed),
        Some(halted) => {
            let reason = halted.outcome.reason().unwrap_or_default();
            format!(
                "{} / {}: {}\npassed={} remaining={}",
                halted.group, halted.step, reason, summary.passed, summary.remaining
            )
        }
    }
}

/// Pretty-printed JSON summary with trailing newline.
pub fn render_json(result: &RunResult) -> Result<String> {
    let contents =
        serde_json::to_string_pretty(&summarize(result)).context("serialize summary")?;
    Ok(format!("{contents}\n"))
}

/// Zero only when every step in the plan passed.
pub fn exit_code(result: &RunResult) -> i32 {
    if result.is_complete() {
        exit_codes::OK
    } else {
        exit_codes::HALTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::execute;
    use crate::plan::RunPlan;
    use crate::test_support::{failing_step, group_with, passing_step};

    fn halted_result() -> RunResult {
        let plan = RunPlan::build(vec![
            group_with(
                "about maps",
                vec![passing_step(1, "a1"), failing_step(2, "check_a_key")],
            ),
            group_with("about files", vec![passing_step(1, "b1")]),
        ])
        .expect("plan");
        execute(&plan)
    }

    #[test]
    fn success_report_counts_passes() {
        let plan = RunPlan::build(vec![group_with("lesson", vec![passing_step(1, "a")])])
            .expect("plan");
        let result = execute(&plan);
        assert_eq!(render(&result), "all koans pass\npassed=1 remaining=0");
        assert_eq!(exit_code(&result), exit_codes::OK);
    }

    #[test]
    fn halt_report_names_the_step_and_counts_the_rest() {
        let result = halted_result();
        assert_eq!(
            render(&result),
            "about maps / check a key: expected 1, got 2\npassed=1 remaining=2"
        );
        assert_eq!(exit_code(&result), exit_codes::HALTED);
    }

    #[test]
    fn displayed_remaining_includes_the_halting_step() {
        let result = halted_result();
        // One step never attempted, plus the halting step itself.
        assert_eq!(result.remaining, 1);
        assert_eq!(summarize(&result).remaining, 2);
    }

    #[test]
    fn json_summary_carries_the_halted_step() {
        let result = halted_result();
        let rendered = render_json(&result).expect("json");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(value["total"], 3);
        assert_eq!(value["passed"], 1);
        assert_eq!(value["remaining"], 2);
        assert_eq!(value["halted"]["group"], "about maps");
        assert_eq!(value["halted"]["outcome"]["kind"], "failed");
    }

    #[test]
    fn json_summary_for_a_full_pass_has_no_halted_step() {
        let plan = RunPlan::build(vec![group_with("lesson", vec![passing_step(1, "a")])])
            .expect("plan");
        let rendered = render_json(&execute(&plan)).expect("json");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(value["remaining"], 0);
        assert!(value["halted"].is_null());
    }
}
