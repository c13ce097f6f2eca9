//! Human-readable reports over an [`Analysis`].
//!
//! Each renderer is a pure function returning the text to print. Colors come
//! from `colored` and follow its global override; see [`crate::runner::execute`].

use colored::Colorize;
use mcp_toolcheck_core::{Analysis, ServerCount};

const RULE_WIDTH: usize = 50;

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title.bold(), "=".repeat(RULE_WIDTH))
}

/// Global counts and the number of servers per status.
#[must_use]
pub fn render_summary(analysis: &Analysis) -> String {
    let summary = &analysis.summary;
    let mut out = heading("🔍 TOOL CONFIGURATION COMPARISON SUMMARY");

    out.push_str(&format!(
        "📊 Servers: {} discovered, {} configured\n",
        summary.total_servers_discovered, summary.total_servers_configured
    ));
    out.push_str(&format!(
        "🛠️  Tools: {} discovered, {} configured\n\n",
        summary.total_tools_discovered, summary.total_tools_configured
    ));

    out.push_str(&format!("{}\n", "📈 SERVER STATUS BREAKDOWN:".bold()));
    for (status, count) in analysis.status_counts() {
        out.push_str(&format!("  {} {}: {count}\n", status.emoji(), status.title()));
    }
    out.push('\n');
    out
}

/// One block per server, in name order.
#[must_use]
pub fn render_details(analysis: &Analysis) -> String {
    let mut out = heading("📋 DETAILED SERVER ANALYSIS");

    for (server, record) in &analysis.servers {
        out.push_str(&format!(
            "\n{} **{}** ({})\n",
            record.status.emoji(),
            server.as_str().bold(),
            record.status.label()
        ));
        out.push_str(&format!("   Discovered: {} tools\n", record.discovered_count));
        out.push_str(&format!("   Configured: {} tools\n", record.configured_count));
        out.push_str(&format!("   Matching: {} tools\n", record.matching_count));

        if !record.missing_from_config.is_empty() {
            out.push_str(&format!(
                "   🔍 Missing from config ({}):\n",
                record.missing_from_config.len()
            ));
            for tool in &record.missing_from_config {
                out.push_str(&format!("      {}\n", format!("+ {tool}").green()));
            }
        }

        if !record.extra_in_config.is_empty() {
            out.push_str(&format!(
                "   ❓ Extra in config ({}):\n",
                record.extra_in_config.len()
            ));
            for tool in &record.extra_in_config {
                out.push_str(&format!("      {}\n", format!("- {tool}").red()));
            }
        }
    }
    out
}

fn ranked(out: &mut String, title: &str, entries: &[ServerCount], unit: &str) {
    out.push_str(&format!("{}\n", title.bold()));
    for entry in entries {
        out.push_str(&format!("   • {}: {} {unit}\n", entry.server, entry.count));
    }
}

/// Action buckets, each omitted when empty, followed by a closing tip.
#[must_use]
pub fn render_recommendations(analysis: &Analysis) -> String {
    let recs = analysis.recommendations();
    let mut out = format!("\n{}", heading("🎯 ACTIONABLE RECOMMENDATIONS"));

    if !recs.add_missing_tools.is_empty() {
        ranked(
            &mut out,
            "1. 📝 UPDATE CONFIG - Add missing tools:",
            &recs.add_missing_tools,
            "missing tools",
        );
    }

    if !recs.remove_extra_tools.is_empty() {
        out.push('\n');
        ranked(
            &mut out,
            "2. 🧹 CLEAN CONFIG - Remove non-existent tools:",
            &recs.remove_extra_tools,
            "extra tools",
        );
    }

    if !recs.configure_new_servers.is_empty() {
        out.push('\n');
        ranked(
            &mut out,
            "3. 🆕 ADD SERVERS - Configure newly discovered servers:",
            &recs.configure_new_servers,
            "tools available",
        );
    }

    if !recs.fix_broken_servers.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            "4. 🔧 FIX BROKEN SERVERS - These servers discovered 0 tools:".bold()
        ));
        for server in &recs.fix_broken_servers {
            out.push_str(&format!("   • {server}\n"));
        }
    }

    out.push_str(
        "\n💡 TIP: Use the exported tool schemas in 'discovered-tools.json' to update your configuration!\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_toolcheck_core::{ServerId, ToolInventory, ToolName, compare};

    fn inventory(entries: &[(&str, &[&str])]) -> ToolInventory {
        entries
            .iter()
            .map(|(server, tools)| {
                (
                    ServerId::new(*server),
                    tools.iter().copied().map(ToolName::from).collect(),
                )
            })
            .collect()
    }

    fn sample() -> Analysis {
        colored::control::set_override(false);
        let discovered = inventory(&[
            ("alpha", &["x", "y"]),
            ("broken", &[]),
            ("fresh", &["a", "b"]),
            ("mixed", &["m", "n"]),
        ]);
        let configured = inventory(&[
            ("alpha", &["x"]),
            ("beta", &[]),
            ("broken", &[]),
            ("mixed", &["m", "z"]),
        ]);
        compare(&discovered, &configured)
    }

    #[test]
    fn test_summary_counts_and_histogram() {
        let text = render_summary(&sample());

        assert!(text.starts_with("🔍 TOOL CONFIGURATION COMPARISON SUMMARY\n"));
        assert!(text.contains(&"=".repeat(RULE_WIDTH)));
        assert!(text.contains("📊 Servers: 4 discovered, 4 configured\n"));
        assert!(text.contains("🛠️  Tools: 6 discovered, 3 configured\n"));

        let breakdown: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.starts_with("📈"))
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(
            breakdown,
            [
                "  👻 Configured But Not Discovered: 1",
                "  🆕 Discovered But Not Configured: 1",
                "  ⚠️  Missing Tools: 1",
                "  🔄 Mixed Differences: 1",
                "  ❌ No Tools Discovered: 1",
            ]
        );
    }

    #[test]
    fn test_details_lists_differences() {
        let text = render_details(&sample());

        assert!(text.contains("\n⚠️  **alpha** (missing tools)\n"));
        assert!(text.contains("   Discovered: 2 tools\n   Configured: 1 tools\n   Matching: 1 tools\n"));
        assert!(text.contains("   🔍 Missing from config (1):\n      + y\n"));
        assert!(text.contains("\n🔄 **mixed** (mixed differences)\n"));
        assert!(text.contains("   ❓ Extra in config (1):\n      - z\n"));
        assert!(text.contains("\n👻 **beta** (configured but not discovered)\n"));

        let alpha = text.find("**alpha**").unwrap();
        let beta = text.find("**beta**").unwrap();
        let mixed = text.find("**mixed**").unwrap();
        assert!(alpha < beta && beta < mixed);
    }

    #[test]
    fn test_recommendations_sections() {
        let text = render_recommendations(&sample());

        assert!(text.starts_with("\n🎯 ACTIONABLE RECOMMENDATIONS\n"));
        assert!(text.contains(
            "1. 📝 UPDATE CONFIG - Add missing tools:\n   • alpha: 1 missing tools\n   • mixed: 1 missing tools\n"
        ));
        assert!(text.contains(
            "\n2. 🧹 CLEAN CONFIG - Remove non-existent tools:\n   • mixed: 1 extra tools\n"
        ));
        assert!(text.contains(
            "\n3. 🆕 ADD SERVERS - Configure newly discovered servers:\n   • fresh: 2 tools available\n"
        ));
        assert!(text.contains(
            "\n4. 🔧 FIX BROKEN SERVERS - These servers discovered 0 tools:\n   • broken\n"
        ));
        assert!(text.ends_with("to update your configuration!\n"));
    }

    #[test]
    fn test_recommendations_omit_empty_sections() {
        colored::control::set_override(false);
        let tools: &[&str] = &["x"];
        let analysis = compare(&inventory(&[("s", tools)]), &inventory(&[("s", tools)]));

        let text = render_recommendations(&analysis);
        assert!(!text.contains("1. "));
        assert!(!text.contains("4. "));
        assert!(text.contains("💡 TIP"));
    }
}
