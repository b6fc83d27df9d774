//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{AnalyzeCommand, CliError, ExecutionSummary, render_report};

pub(super) const TRIANGLE: &str = "A\tC\nA\tB\t10\t1\nB\tC\t10\t2\nA\tC\t25\t3\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_listing(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn analyze_command(input: PathBuf) -> AnalyzeCommand {
    AnalyzeCommand {
        input,
        output: None,
    }
}

pub(super) fn run_command_expecting_error(command: AnalyzeCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_report(&summary.analysis, &mut buffer) {
        panic!("rendering into memory must succeed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("report must be UTF-8: {err}"),
    }
}
