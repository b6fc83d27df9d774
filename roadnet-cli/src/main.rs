//! CLI entry point for road network analysis.
//!
//! Parses arguments with clap, runs the analysis, renders the report to the
//! requested sink and maps failures to a non-zero exit code. Logging is set
//! up first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use roadnet_cli::{
    cli::{Cli, CliError, create_output, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parses CLI arguments, executes the command and writes the report.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;

    let sink: Box<dyn Write> = match summary.output.as_deref() {
        Some(path) => Box::new(create_output(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);
    render_report(&summary.analysis, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some(core.code()),
                _ => None,
            })
            .map(|code| field::display(code.as_str()));

        let message = format!("{err:#}");
        error!(error = %message, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
