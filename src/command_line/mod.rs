//! Command-line front end: argument parsing, console prompts and result printing.

pub(crate) mod cli;
pub(crate) mod prompt;
