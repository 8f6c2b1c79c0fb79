//! Command-line interface.

mod commands;

pub use commands::{execute, is_verbose, run, Cli};
