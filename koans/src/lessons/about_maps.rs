//! A `HashMap` stores key-value pairs and answers lookups by key.

use std::collections::HashMap;

use crate::assertions::{StepError, expect_eq, expect_false, expect_true};
use crate::group::Group;

fn capitals() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Bruce", "Wayne"),
        ("United Kingdom", "London"),
        ("Poland", "Warsaw"),
        ("Japan", "Tokyo"),
    ])
}

pub fn group() -> Group {
    Group::new("about maps")
        .step(1, "a_map_holds_keys_and_values", a_map_holds_keys_and_values)
        .step(2, "using_keys_to_get_values", using_keys_to_get_values)
        .step(3, "check_if_a_key_exists", check_if_a_key_exists)
        .step(4, "check_if_a_value_exists", check_if_a_value_exists)
        .step(5, "update_the_value_of_a_key", update_the_value_of_a_key)
        .step(6, "remove_a_key", remove_a_key)
}

fn a_map_holds_keys_and_values() -> Result<(), StepError> {
    let mut map = HashMap::new();
    map.insert("Key", "Value");
    expect_eq(Some("Value"), map.get("Key").copied())
}

/// Pass keys to get their values.
fn using_keys_to_get_values() -> Result<(), StepError> {
    let map = capitals();
    let key = "Japan";
    expect_eq(Some("Tokyo"), map.get(key).copied())
}

fn check_if_a_key_exists() -> Result<(), StepError> {
    let map = capitals();
    expect_true(map.contains_key("Bruce"), "the key is present")
}

/// Values have no index of their own; scanning is the only way.
fn check_if_a_value_exists() -> Result<(), StepError> {
    let map = capitals();
    expect_true(
        map.values().any(|value| *value == "Wayne"),
        "the value is present",
    )
}

/// Inserting over an existing key replaces its value.
fn update_the_value_of_a_key() -> Result<(), StepError> {
    let mut map = capitals();
    map.insert("India", "Mumbai");

    let expected = "New Delhi";
    map.insert("India", expected);
    expect_eq(Some(expected), map.get("India").copied())
}

fn remove_a_key() -> Result<(), StepError> {
    let mut map = capitals();
    let removed = map.remove("Bruce");
    expect_eq(Some("Wayne"), removed)?;
    expect_false(map.contains_key("Bruce"), "the key is gone")
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
