//! Cucumber step definitions for interface tests.

pub mod linked_list;
