/// Text scanning helpers shared by the statement parser.
///
/// This module provides the byte-level searches used to cut program text into
/// statements: matching braces and parentheses, whole-word keyword detection,
/// and locating the `=` of an assignment.
pub mod scan;
