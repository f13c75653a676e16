//! `std::fs` provides functions for creating, copying, deleting, moving,
//! and reading files.
//!
//! Every step owns a scratch directory (removed when the handle drops);
//! environment problems surface as faults, not assertion failures.

use std::fs;

use anyhow::Context;

use crate::assertions::{StepError, expect_eq, expect_false, expect_true};
use crate::group::Group;

pub fn group() -> Group {
    Group::new("about files")
        .step(1, "creating_and_deleting_a_file", creating_and_deleting_a_file)
        .step(2, "copying_a_file", copying_a_file)
        .step(3, "moving_a_file", moving_a_file)
        .step(4, "reading_a_file", reading_a_file)
        .step(5, "reading_lines", reading_lines)
}

fn creating_and_deleting_a_file() -> Result<(), StepError> {
    let dir = tempfile::tempdir().context("create scratch dir")?;
    let path = dir.path().join("practice.txt");

    fs::write(&path, "koan").context("write file")?;
    expect_true(path.exists(), "a written file exists")?;

    fs::remove_file(&path).context("delete file")?;
    expect_false(path.exists(), "a deleted file exists")
}

fn copying_a_file() -> Result<(), StepError> {
    let dir = tempfile::tempdir().context("create scratch dir")?;
    let path = dir.path().join("original.txt");
    let new_path = dir.path().join("copy.txt");

    fs::write(&path, "koan").context("write file")?;
    fs::copy(&path, &new_path).context("copy file")?;

    expect_true(path.exists(), "the original remains")?;
    expect_true(new_path.exists(), "the copy exists")
}

fn moving_a_file() -> Result<(), StepError> {
    let dir = tempfile::tempdir().context("create scratch dir")?;
    let path = dir.path().join("original.txt");
    let new_path = dir.path().join("moved.txt");

    fs::write(&path, "koan").context("write file")?;
    fs::rename(&path, &new_path).context("move file")?;

    expect_false(path.exists(), "the original remains")?;
    expect_true(new_path.exists(), "the moved file exists")
}

fn reading_a_file() -> Result<(), StepError> {
    let dir = tempfile::tempdir().context("create scratch dir")?;
    let path = dir.path().join("greeting.txt");

    fs::write(&path, "Hello World!").context("write file")?;
    let message = fs::read_to_string(&path).context("read file")?;
    expect_eq("Hello World!", message.as_str())
}

fn reading_lines() -> Result<(), StepError> {
    let dir = tempfile::tempdir().context("create scratch dir")?;
    let path = dir.path().join("lines.txt");

    fs::write(&path, "Line0\nLine1\nLine2").context("write file")?;
    let contents = fs::read_to_string(&path).context("read file")?;
    let lines: Vec<&str> = contents.lines().collect();

    expect_eq(3, lines.len())?;
    expect_eq("Line1", lines[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_passes() {
        for step in group().steps {
            assert!((step.action)().is_ok(), "step {} did not pass", step.name);
        }
    }
}
