//! Command execution and runtime logic.
//!
//! Contains the comparison run and logging initialization.

use anyhow::{Context, Result};
use mcp_toolcheck_core::cli::{ExitCode, OutputFormat};
use mcp_toolcheck_core::{compare, ensure_exists, load_configured, load_discovered};
use std::io::{IsTerminal, Write};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::formatters;

/// Initializes logging infrastructure.
///
/// Logs go to standard error so standard output carries only the report.
/// ANSI styling is only used when standard error is a terminal.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()?;

    Ok(())
}

/// Runs one comparison, writing the report to `out`.
///
/// Both inputs are checked for existence before either is parsed. The
/// analysis file is written after the report; in JSON mode the confirmation
/// line is logged instead of printed so `out` stays valid JSON. The `text`
/// format turns colors off for the rest of the process.
///
/// # Errors
///
/// Returns an error if an input is missing or malformed, the output format is
/// unknown, or the report or analysis file cannot be written.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    let format: OutputFormat = cli.format.parse()?;
    if format == OutputFormat::Text {
        colored::control::set_override(false);
    }
    debug!(
        discovered = %cli.discovered.display(),
        config = %cli.config.display(),
        %format,
        "starting comparison"
    );

    ensure_exists(&cli.discovered)?;
    ensure_exists(&cli.config)?;

    let discovered = load_discovered(&cli.discovered)?;
    let configured = load_configured(&cli.config)?;
    let analysis = compare(&discovered, &configured);

    let rendered = formatters::format_output(&analysis, format)?;
    write!(out, "{rendered}").context("failed to write report")?;
    if format == OutputFormat::Json {
        writeln!(out).context("failed to write report")?;
    }

    analysis.write_json(&cli.output)?;

    if format == OutputFormat::Json {
        info!(path = %cli.output.display(), "detailed analysis saved");
    } else {
        writeln!(
            out,
            "\n📄 Detailed analysis saved to: {}",
            cli.output.display()
        )
        .context("failed to write report")?;
    }

    Ok(ExitCode::SUCCESS)
}
