//! The lesson content: koan groups registered in declaration order.
//!
//! Everything under this module is teaching content, not engine. Each
//! lesson declares its steps through the group registry; the engine treats
//! the step bodies as opaque actions.

pub mod about_asserts;
pub mod about_booleans;
pub mod about_files;
pub mod about_maps;
pub mod about_strings;

use crate::group::Group;

/// Every lesson, in the order a learner should meet them.
pub fn all_groups() -> Vec<Group> {
    vec![
        about_asserts::group(),
        about_booleans::group(),
        about_strings::group(),
        about_maps::group(),
        about_files::group(),
    ]
}
