//! Argument parsing and the `run` pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use tsunagi_core::{
    ComparisonOptions, ComparisonReport, DEFAULT_MAX_ATTEMPTS, GeneratedGraph, GraphConfig,
    MstAlgorithm, TsunagiError, compare, generate,
};

use super::input::{InputError, Parameters, parse_parameters};

/// Top-level options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tsunagi",
    about = "Compare Kruskal and Prim minimum spanning trees on a random graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a connected random graph and compare MST runs on it.
    Run(RunCommand),
}

/// Options accepted by `run`.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// How many graphs may be drawn before giving up on connectivity.
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Which algorithms to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::All)]
    pub algorithm: AlgorithmChoice,

    /// Where the graph parameters come from.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Sources of `n`, the seed and `p`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Read `n seed p` from a whitespace-separated text file.
    File(FileArgs),
    /// Take the parameters from flags.
    Random(RandomArgs),
}

/// Arguments of `run file`.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path of the input file.
    pub path: PathBuf,
}

/// Arguments of `run random`.
#[derive(Debug, Args, Clone, Copy)]
pub struct RandomArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,
    /// Generator seed.
    #[arg(long)]
    pub seed: u64,
    /// Probability that any pair of vertices is connected.
    #[arg(long)]
    pub probability: f64,
}

/// Algorithm filter for `--algorithm`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmChoice {
    /// All eight runs.
    #[default]
    All,
    /// The six Kruskal runs.
    Kruskal,
    /// The two Prim runs.
    Prim,
}

impl AlgorithmChoice {
    const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    fn options(self) -> ComparisonOptions {
        match self {
            Self::All => ComparisonOptions::new(),
            Self::Kruskal => ComparisonOptions::new().with_algorithm(MstAlgorithm::Kruskal),
            Self::Prim => ComparisonOptions::new().with_algorithm(MstAlgorithm::Prim),
        }
    }
}

/// Errors surfaced while executing a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Operating system error.
        #[source]
        source: io::Error,
    },
    /// The parameters were malformed or out of range.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Generation or comparison failed.
    #[error(transparent)]
    Core(#[from] TsunagiError),
}

/// Everything a finished `run` produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The parameters the graph was generated from.
    pub parameters: Parameters,
    /// The connected graph and its generation statistics.
    pub generated: GeneratedGraph,
    /// One report per executed run.
    pub comparison: ComparisonReport,
}

/// Executes `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or validated, or when
/// generation or a comparison run fails.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::{
///     AlgorithmChoice, Cli, Command, RandomArgs, RunCommand, RunSource, run_cli,
/// };
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         max_attempts: 100,
///         algorithm: AlgorithmChoice::Prim,
///         source: RunSource::Random(RandomArgs { vertices: 5, seed: 3, probability: 1.0 }),
///     }),
/// };
/// let outcome = run_cli(cli)?;
/// assert_eq!(outcome.comparison.runs().len(), 2);
/// # Ok::<(), tsunagi_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<RunOutcome, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(source = field::Empty, algorithm = command.algorithm.label()),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<RunOutcome, CliError> {
    let span = Span::current();
    let parameters = match &command.source {
        RunSource::File(args) => {
            span.record("source", field::display("file"));
            read_parameters(&args.path)?
        }
        RunSource::Random(args) => {
            span.record("source", field::display("random"));
            Parameters::new(args.vertices, args.seed, args.probability)?
        }
    };

    let config = GraphConfig::new(
        parameters.vertex_count(),
        parameters.seed(),
        parameters.edge_probability(),
    )
    .with_max_attempts(command.max_attempts);
    let generated = generate(&config).map_err(TsunagiError::from)?;
    let comparison = compare(generated.graph(), &command.algorithm.options())?;

    info!(
        vertex_count = parameters.vertex_count(),
        edges = generated.graph().edge_count(),
        attempts = generated.attempts(),
        runs = comparison.runs().len(),
        "command completed"
    );
    Ok(RunOutcome {
        parameters,
        generated,
        comparison,
    })
}

#[instrument(name = "cli.read_parameters", err, fields(path = %path.display()))]
pub(super) fn read_parameters(path: &Path) -> Result<Parameters, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_parameters(&contents)?)
}
