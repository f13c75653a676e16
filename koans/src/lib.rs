//! Fail-fast koan practice runner.
//!
//! A koan is one small, independently executable check; a group is one
//! lesson topic. The engine keeps a strict split:
//!
//! - **[`group`] / [`plan`]**: declarative step registry and pure
//!   discovery. No I/O, fully testable in isolation.
//! - **[`executor`] / [`outcome`]**: ordered, single-threaded execution
//!   with a three-valued outcome per step, halting at the first non-pass.
//! - **[`report`]**: learner-facing rendering and exit-code mapping.
//!
//! Lesson content lives under [`lessons`] and is consumed by the engine
//! as opaque actions.

pub mod assertions;
pub mod executor;
pub mod exit_codes;
pub mod group;
pub mod lessons;
pub mod logging;
pub mod outcome;
pub mod plan;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
