//! MCP Tool Check CLI.
//!
//! Compares the tools discovered on running MCP servers against the tools
//! declared in a servers configuration.
//!
//! # Examples
//!
//! ```bash
//! # Export what the servers expose, then compare
//! mcp-toolcheck discovered-tools.json servers-config.json
//!
//! # Machine-readable output and a custom analysis path
//! mcp-toolcheck --format json -o /tmp/analysis.json discovered-tools.json servers-config.json
//! ```

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use mcp_toolcheck_cli::Cli;
use mcp_toolcheck_cli::runner::{execute, init_logging};
use mcp_toolcheck_core::cli::ExitCode;
use std::io::Write;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            let _ = writeln!(std::io::stdout().lock(), "{}", Cli::command().render_usage());
            std::process::exit(ExitCode::ERROR.as_i32());
        }
    };

    let result = init_logging(cli.verbose).and_then(|()| execute(&cli, &mut std::io::stdout()));
    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            // Stdout may be the thing that failed; the exit code still reports it.
            let _ = writeln!(std::io::stdout().lock(), "Error: {err:#}");
            ExitCode::ERROR
        }
    };

    std::process::exit(exit_code.as_i32());
}
