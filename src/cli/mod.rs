//! CLI layer: argument parsing, output formatting, and one module per
//! subcommand.

pub mod args;
pub mod create;
pub mod delete;
pub mod list;
pub mod output;
pub mod rename;
pub mod search;
