//! One of the longest lessons and, perhaps, one of the most important.
//! String behavior in Rust is not always what newcomers expect,
//! especially around ownership, escapes, and formatting.

use anyhow::Context;
use regex::Regex;

use crate::assertions::{StepError, expect_eq, expect_ne, expect_true};
use crate::group::Group;

pub fn group() -> Group {
    Group::new("about strings")
        .step(
            1,
            "double_quoted_literals_are_string_slices",
            double_quoted_literals_are_string_slices,
        )
        .step(
            2,
            "strings_can_contain_escaped_quotes",
            strings_can_contain_escaped_quotes,
        )
        .step(3, "raw_strings_take_quoting_literally", raw_strings_take_quoting_literally)
        .step(
            4,
            "literal_strings_interpret_escape_characters",
            literal_strings_interpret_escape_characters,
        )
        .step(
            5,
            "raw_strings_do_not_interpret_escape_characters",
            raw_strings_do_not_interpret_escape_characters,
        )
        .step(
            6,
            "raw_strings_still_do_not_interpret_escape_characters",
            raw_strings_still_do_not_interpret_escape_characters,
        )
        .step(7, "plus_will_concatenate_two_strings", plus_will_concatenate_two_strings)
        .step(
            8,
            "concatenation_does_not_modify_the_originals",
            concatenation_does_not_modify_the_originals,
        )
        .step(9, "push_str_appends_in_place", push_str_appends_in_place)
        .step(10, "format_interpolates_values", format_interpolates_values)
        .step(11, "format_can_pad_to_the_left", format_can_pad_to_the_left)
        .step(12, "format_can_pad_to_the_right", format_can_pad_to_the_right)
        .step(
            13,
            "displayed_decimals_can_be_controlled",
            displayed_decimals_can_be_controlled,
        )
        .step(14, "strings_can_be_split", strings_can_be_split)
        .step(
            15,
            "strings_can_be_split_using_characters",
            strings_can_be_split_using_characters,
        )
        .step(
            16,
            "strings_can_be_split_using_regular_expressions",
            strings_can_be_split_using_regular_expressions,
        )
        .step(
            17,
            "you_can_get_a_substring_from_a_string",
            you_can_get_a_substring_from_a_string,
        )
        .step(
            18,
            "you_can_get_a_single_character_from_a_string",
            you_can_get_a_single_character_from_a_string,
        )
        .step(
            19,
            "single_characters_are_represented_by_integers",
            single_characters_are_represented_by_integers,
        )
        .step(
            20,
            "strings_are_compared_by_content",
            strings_are_compared_by_content,
        )
}

fn double_quoted_literals_are_string_slices() -> Result<(), StepError> {
    let str = "Hello, World";
    expect_eq(12, str.len())
}

fn strings_can_contain_escaped_quotes() -> Result<(), StepError> {
    let str = "Hello, \"World\"";
    expect_eq(14, str.len())
}

/// The `r` prefix creates a raw string literal.
fn raw_strings_take_quoting_literally() -> Result<(), StepError> {
    let str = r#"Hello, "World""#;
    expect_eq(14, str.len())
}

fn literal_strings_interpret_escape_characters() -> Result<(), StepError> {
    let str = "\n";
    expect_eq(1, str.len())
}

fn raw_strings_do_not_interpret_escape_characters() -> Result<(), StepError> {
    let str = r"\n";
    expect_eq(2, str.len())
}

fn raw_strings_still_do_not_interpret_escape_characters() -> Result<(), StepError> {
    let str = r"\\\";
    expect_eq(3, str.len())
}

fn plus_will_concatenate_two_strings() -> Result<(), StepError> {
    let str = "Hello, ".to_string() + "World";
    expect_eq("Hello, World", str.as_str())
}

/// Concatenating with `format!` reads both operands; neither original is
/// consumed or changed.
fn concatenation_does_not_modify_the_originals() -> Result<(), StepError> {
    let str_a = "Hello, ";
    let str_b = "World";
    let full = format!("{str_a}{str_b}");
    expect_eq("Hello, World", full.as_str())?;
    expect_eq("Hello, ", str_a)?;
    expect_eq("World", str_b)
}

/// A `String` owns its buffer, so it can grow in place.
fn push_str_appends_in_place() -> Result<(), StepError> {
    let mut str_a = "Hello, ".to_string();
    let str_b = "World";
    str_a.push_str(str_b);
    expect_eq("Hello, World", str_a.as_str())?;
    expect_eq("World", str_b)
}

fn format_interpolates_values() -> Result<(), StepError> {
    let world = "World";
    let str = format!("Hello, {world}");
    expect_eq("Hello, World", str.as_str())
}

fn format_can_pad_to_the_left() -> Result<(), StepError> {
    let str = format!("{:>3}", "x");
    expect_eq("  x", str.as_str())
}

fn format_can_pad_to_the_right() -> Result<(), StepError> {
    let str = format!("{:<3}", "x");
    expect_eq("x  ", str.as_str())
}

fn displayed_decimals_can_be_controlled() -> Result<(), StepError> {
    expect_eq("12.35", format!("{:.2}", 12.3456).as_str())?;
    expect_eq("12.30", format!("{:.2}", 12.3).as_str())
}

fn strings_can_be_split() -> Result<(), StepError> {
    let str = "Sausage Egg Cheese";
    let words: Vec<&str> = str.split_whitespace().collect();
    expect_eq(vec!["Sausage", "Egg", "Cheese"], words)
}

fn strings_can_be_split_using_characters() -> Result<(), StepError> {
    let str = "the:rain:in:spain";
    let words: Vec<&str> = str.split(':').collect();
    expect_eq(vec!["the", "rain", "in", "spain"], words)
}

/// A full treatment of regular expressions is beyond the scope of this
/// lesson. The book "Mastering Regular Expressions" is highly recommended
/// to be on your bookshelf.
fn strings_can_be_split_using_regular_expressions() -> Result<(), StepError> {
    let str = "the:rain:in:spain";
    let separator = Regex::new(":").context("compile separator pattern")?;
    let words: Vec<&str> = separator.split(str).collect();
    expect_eq(vec!["the", "rain", "in", "spain"], words)
}

/// Byte-range slicing yields a `&str` view into the original.
fn you_can_get_a_substring_from_a_string() -> Result<(), StepError> {
    let str = "Bacon, lettuce and tomato";
    expect_eq("tomato", &str[19..])?;
    expect_eq("let", &str[7..10])
}

fn you_can_get_a_single_character_from_a_string() -> Result<(), StepError> {
    let str = "Bacon, lettuce and tomato";
    expect_eq(Some('B'), str.chars().next())
}

fn single_characters_are_represented_by_integers() -> Result<(), StepError> {
    expect_eq(97, 'a' as u32)?;
    expect_eq(98, 'b' as u32)?;
    expect_true('b' as u32 == 'a' as u32 + 1, "b follows a")
}

/// Equality looks at the bytes, not at where the string came from.
fn strings_are_compared_by_content() -> Result<(), StepError> {
    expect_eq("Hello".to_string(), "Hel".to_string() + "lo")?;
    expect_ne("Hello".to_string(), "World".to_string())
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
