//! The `tsunagi run` command.
//!
//! `run` takes `n`, a seed and `p` from a file or from flags, generates a
//! connected random graph and prints the MST comparison report.

mod commands;
mod input;
mod report;

pub use commands::{
    AlgorithmChoice, Cli, CliError, Command, FileArgs, RandomArgs, RunCommand, RunOutcome,
    RunSource, run_cli,
};
pub use input::{InputError, Parameters, parse_parameters};
pub use report::{DETAIL_THRESHOLD, render_report};
