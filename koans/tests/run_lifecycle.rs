//! Engine-level scenarios: ordering, halting, progress accounting, and the
//! shipped lesson set, driven end-to-end through discovery, execution, and
//! reporting.

use koans::executor::execute;
use koans::exit_codes;
use koans::lessons::all_groups;
use koans::outcome::StepOutcome;
use koans::plan::RunPlan;
use koans::report;
use koans::test_support::{failing_step, group_with, passing_group, passing_step};

/// The shipped lessons are solved content: a full cycle passes every step
/// and exits zero.
#[test]
fn shipped_lessons_all_pass() {
    let plan = RunPlan::build(all_groups()).expect("plan");
    let result = execute(&plan);
    assert!(result.is_complete(), "halted at {:?}", result.halted());
    assert_eq!(result.remaining, 0);
    assert_eq!(report::exit_code(&result), exit_codes::OK);
    assert!(report::render(&result).starts_with("all koans pass"));
}

/// Two groups, "a" (a1 passes, a2 fails) and "b" (both steps would pass):
/// the run records [a1: passed, a2: failed], never attempts b, and exits
/// non-zero.
#[test]
fn halts_at_first_failure_across_groups() {
    let plan = RunPlan::build(vec![
        group_with("a", vec![passing_step(1, "a1"), failing_step(2, "a2")]),
        group_with("b", vec![passing_step(1, "b1"), passing_step(2, "b2")]),
    ])
    .expect("plan");

    let result = execute(&plan);
    let outcomes: Vec<(&str, bool)> = result
        .attempted
        .iter()
        .map(|step| (step.name, step.outcome.is_pass()))
        .collect();
    assert_eq!(outcomes, vec![("a1", true), ("a2", false)]);
    assert_eq!(result.remaining, 2);
    assert!(matches!(
        result.halted().expect("halted").outcome,
        StepOutcome::Failed { .. }
    ));
    assert_ne!(report::exit_code(&result), exit_codes::OK);
    assert!(report::render(&result).starts_with("a / a2: "));
}

/// Steps run in ascending order within each group, groups in declaration
/// order, for interleaved non-sequential order values.
#[test]
fn exact_sequencing_across_three_groups() {
    let plan = RunPlan::build(vec![
        group_with(
            "first",
            vec![
                passing_step(10, "f10"),
                passing_step(5, "f5"),
                passing_step(20, "f20"),
            ],
        ),
        group_with("second", vec![passing_step(2, "s2"), passing_step(1, "s1")]),
        group_with("third", vec![passing_step(7, "t7")]),
    ])
    .expect("plan");

    let result = execute(&plan);
    let sequence: Vec<(&str, &str)> = result
        .attempted
        .iter()
        .map(|step| (step.group, step.name))
        .collect();
    assert_eq!(
        sequence,
        vec![
            ("first", "f5"),
            ("first", "f10"),
            ("first", "f20"),
            ("second", "s1"),
            ("second", "s2"),
            ("third", "t7"),
        ]
    );
}

/// Three groups of five passing steps: fifteen outcomes, nothing
/// remaining, exit zero.
#[test]
fn all_pass_across_three_groups_of_five() {
    let plan = RunPlan::build(vec![
        passing_group("a", 5),
        passing_group("b", 5),
        passing_group("c", 5),
    ])
    .expect("plan");

    let result = execute(&plan);
    assert_eq!(result.attempted.len(), 15);
    assert_eq!(result.passed_count(), 15);
    assert_eq!(result.remaining, 0);
    assert_eq!(report::exit_code(&result), exit_codes::OK);
}

/// An empty plan reports immediate full success.
#[test]
fn empty_plan_reports_success() {
    let plan = RunPlan::build(Vec::new()).expect("plan");
    let result = execute(&plan);
    assert!(result.is_complete());
    assert_eq!(report::exit_code(&result), exit_codes::OK);
    assert!(report::render(&result).starts_with("all koans pass"));
}

/// Duplicate step orders within a group fail discovery; the executor never
/// sees a plan.
#[test]
fn duplicate_order_fails_before_execution() {
    let err = RunPlan::build(vec![group_with(
        "lesson",
        vec![passing_step(3, "first"), passing_step(3, "second")],
    )])
    .expect_err("duplicate order");
    assert!(format!("{err:#}").contains("duplicate step order 3"));
}

/// Re-running discovery and execution over unchanged deterministic
/// declarations yields an identical result.
#[test]
fn rerun_is_deterministic() {
    let groups = || {
        vec![
            group_with("a", vec![passing_step(1, "a1"), failing_step(2, "a2")]),
            passing_group("b", 3),
        ]
    };
    let first = execute(&RunPlan::build(groups()).expect("plan"));
    let second = execute(&RunPlan::build(groups()).expect("plan"));
    assert_eq!(first, second);
}
