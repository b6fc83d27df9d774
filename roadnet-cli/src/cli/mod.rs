//! Command-line interface for road network analysis.
//!
//! The single `analyze` command loads a tab-separated road listing, runs the
//! analysis and writes the report to stdout or to a file.

mod commands;
mod report;

pub use commands::{
    AnalyzeCommand, Cli, CliError, Command, ExecutionSummary, create_output, run_cli,
};
pub use report::render_report;

#[cfg(test)]
mod test_helpers;
