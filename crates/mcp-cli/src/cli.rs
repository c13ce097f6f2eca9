//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Default location of the analysis file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "tool-comparison-analysis.json";

/// MCP Tool Check - compare discovered MCP tools against a servers configuration.
///
/// Reads the tools exported by running MCP servers and the tools declared in
/// the servers configuration, reports per-server differences, and saves the
/// full analysis as JSON.
#[derive(Parser, Debug)]
#[command(name = "mcp-toolcheck")]
#[command(version, about, long_about = None)]
#[command(author = "MCP Execution Team")]
pub struct Cli {
    /// Discovered-tools export (e.g. discovered-tools.json)
    #[arg(value_name = "DISCOVERED")]
    pub discovered: PathBuf,

    /// Servers configuration (e.g. servers-config.json)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Where to write the analysis
    #[arg(short, long, env = "MCP_TOOLCHECK_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format (json, text, pretty)
    #[arg(long = "format", default_value = "pretty")]
    pub format: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}
