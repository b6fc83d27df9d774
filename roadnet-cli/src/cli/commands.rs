//! Command implementations and argument parsing for the roadnet CLI.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use roadnet_core::{MapAnalysis, RoadNetError, analyze};
use roadnet_providers_tsv::{RoadListing, TsvProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "roadnet", about = "Analyse road networks and their barely connected maps.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compare the fastest route with the one left on the barely connected map.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Tab-separated listing: a `start<TAB>end` line, then one road per line.
    pub input: PathBuf,

    /// Write the report to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be opened, read or created.
    #[error("I/O error on `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The road listing could not be parsed.
    #[error(transparent)]
    Provider(#[from] TsvProviderError),
    /// The road network was rejected by the core.
    #[error(transparent)]
    Core(#[from] RoadNetError),
}

/// Outcome of a CLI command, ready to be rendered.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the report should be written; `None` means stdout.
    pub output: Option<PathBuf>,
    /// The analysis to report.
    pub analysis: MapAnalysis,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the listing cannot be read or parsed, or the
/// network is rejected.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadnet_cli::cli::{AnalyzeCommand, Cli, Command, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A\tB\nA\tB\t3\t1\n")?;
/// let cli = Cli {
///     command: Command::Analyze(AnalyzeCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.analysis.network_length(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Analyze(command) => {
            Span::current().record("command", field::display("analyze"));
            run_command(command)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, roads = field::Empty),
)]
pub(super) fn run_command(command: AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let AnalyzeCommand { input, output } = command;
    let span = Span::current();
    span.record("input", field::display(input.display()));

    let listing = load_listing(&input)?;
    span.record("roads", listing.roads().len());

    let (query, roads) = listing.into_parts();
    let analysis = analyze(&roads, &query)?;
    info!(
        start = query.start(),
        end = query.end(),
        route_found = analysis.fastest_route().is_some(),
        "command completed"
    );
    Ok(ExecutionSummary { output, analysis })
}

fn load_listing(path: &Path) -> Result<RoadListing, CliError> {
    RoadListing::try_from_path(path).map_err(|err| match err {
        TsvProviderError::Io(source) => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => CliError::Provider(other),
    })
}

/// Creates (or truncates) the report file at `path`.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be created.
#[instrument(name = "cli.create_output", err, fields(path = %path.display()))]
pub fn create_output(path: &Path) -> Result<File, CliError> {
    File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
