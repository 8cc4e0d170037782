//! Entry point of the `tsunagi` binary.
//!
//! Installs logging, runs the parsed command, writes the report to stdout and
//! maps failures to a non-zero exit status. Failures are logged with their
//! stable error code when one exists.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use tsunagi_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let outcome = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&outcome, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cause = err.downcast_ref::<CliError>();
        let code = cause.and_then(|cli_error| match cli_error {
            CliError::Core(core) => Some(core.detail_code()),
            _ => None,
        });
        let input = cause.and_then(|cli_error| match cli_error {
            CliError::Input(input) => Some(input.to_string()),
            _ => None,
        });

        error!(
            error = %err,
            code = code.map(field::display),
            input = input.as_deref().map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
