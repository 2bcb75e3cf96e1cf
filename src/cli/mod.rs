//! Support code for the `sgraph` command-line tool.

pub mod commands;
pub mod input;
