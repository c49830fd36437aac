//! Subcommand handlers.
//!
//! Each handler returns the text to print so it can be checked without a
//! terminal.

pub mod invoice;
pub mod shapes;
pub mod vehicles;
