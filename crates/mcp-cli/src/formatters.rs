//! Output formatters for the comparison.
//!
//! Renders an [`Analysis`] for standard output in JSON, text, or pretty mode.

use anyhow::Result;
use mcp_toolcheck_core::Analysis;
use mcp_toolcheck_core::cli::OutputFormat;

use crate::report;

/// Format the analysis according to the specified output format.
///
/// `Text` and `Pretty` render the same reports; whether they carry colors is
/// decided by `colored`'s global override, which the caller sets.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use mcp_toolcheck_cli::formatters::format_output;
/// use mcp_toolcheck_core::cli::OutputFormat;
/// use mcp_toolcheck_core::{ToolInventory, compare};
///
/// let analysis = compare(&ToolInventory::new(), &ToolInventory::new());
/// let output = format_output(&analysis, OutputFormat::Json)?;
/// assert!(output.contains("\"summary\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(analysis),
        OutputFormat::Text | OutputFormat::Pretty => Ok(reports(analysis)),
    }
}

/// Summary, detail and recommendation reports, in that order.
#[must_use]
pub fn reports(analysis: &Analysis) -> String {
    let mut out = report::render_summary(analysis);
    out.push_str(&report::render_details(analysis));
    out.push_str(&report::render_recommendations(analysis));
    out
}

/// JSON output formatting.
pub mod json {
    use super::{Analysis, Result};

    /// Format the analysis as JSON with 2-space indentation.
    pub fn format(analysis: &Analysis) -> Result<String> {
        Ok(analysis.to_json_pretty()?)
    }
}
