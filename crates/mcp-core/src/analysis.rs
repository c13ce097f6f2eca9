//! Comparison of discovered and configured tool inventories.
//!
//! [`compare`] is a pure function: it visits the sorted union of server names
//! from both inventories and, for each, partitions `discovered ∪ configured`
//! into matching, missing and extra tools before assigning a [`ServerStatus`].
//!
//! # Examples
//!
//! ```
//! use mcp_toolcheck_core::{ServerId, ServerStatus, compare, parse_configured, parse_discovered};
//!
//! let discovered = parse_discovered(
//!     r#"{"servers": [{"name": "alpha", "tools": [{"name": "x"}, {"name": "y"}]}]}"#,
//! )?;
//! let configured = parse_configured(r#"{"servers": {"alpha": {"tools": {"x": {}}}, "beta": {}}}"#)?;
//!
//! let analysis = compare(&discovered, &configured);
//! let alpha = &analysis.servers[&ServerId::new("alpha")];
//! assert_eq!(alpha.status, ServerStatus::MissingTools);
//! assert_eq!(alpha.missing_from_config[0].as_str(), "y");
//! assert_eq!(
//!     analysis.servers[&ServerId::new("beta")].status,
//!     ServerStatus::ConfiguredButNotDiscovered
//! );
//! # Ok::<(), mcp_toolcheck_core::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::status::ServerStatus;
use crate::types::{ServerId, ToolInventory, ToolName, ToolSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Global counts over both inventories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Distinct server names in the export
    pub total_servers_discovered: usize,
    /// Distinct server names in the configuration
    pub total_servers_configured: usize,
    /// Tool entries listed in the export, duplicates included
    pub total_tools_discovered: usize,
    /// Tool entries declared in the configuration
    pub total_tools_configured: usize,
}

/// Comparison result for a single server.
///
/// `matching_tools`, `missing_from_config` and `extra_in_config` are sorted,
/// pairwise disjoint, and together cover every tool either side knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// De-duplicated discovered tool count
    pub discovered_count: usize,
    /// De-duplicated configured tool count
    pub configured_count: usize,
    /// Tools present on both sides
    pub matching_count: usize,
    /// Discovered but not configured
    pub missing_from_config: Vec<ToolName>,
    /// Configured but not discovered
    pub extra_in_config: Vec<ToolName>,
    /// Discovered and configured
    pub matching_tools: Vec<ToolName>,
    /// Classification
    pub status: ServerStatus,
}

impl ServerRecord {
    fn new(discovered: Option<&ToolSet>, configured: Option<&ToolSet>) -> Self {
        let empty = ToolSet::new();
        let disc = discovered.unwrap_or(&empty);
        let conf = configured.unwrap_or(&empty);

        let missing: ToolSet = disc.difference(conf).cloned().collect();
        let extra: ToolSet = conf.difference(disc).cloned().collect();
        let matching: ToolSet = disc.intersection(conf).cloned().collect();

        let status = ServerStatus::classify(discovered, configured, &missing, &extra);

        Self {
            discovered_count: disc.len(),
            configured_count: conf.len(),
            matching_count: matching.len(),
            missing_from_config: missing.into_iter().collect(),
            extra_in_config: extra.into_iter().collect(),
            matching_tools: matching.into_iter().collect(),
            status,
        }
    }
}

/// Full comparison of both inventories.
///
/// Built once per run and read-only afterwards. Servers iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Global counts
    pub summary: Summary,
    /// Per-server records keyed by server name
    pub servers: BTreeMap<ServerId, ServerRecord>,
}

/// A server paired with the count that ranks it within a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCount {
    /// Server name
    pub server: ServerId,
    /// Number of tools relevant to the recommendation
    pub count: usize,
}

/// Follow-up actions derived from an [`Analysis`].
///
/// Ranked buckets are sorted by count, largest first; servers with equal
/// counts stay in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations {
    /// Servers whose configuration lacks discovered tools
    pub add_missing_tools: Vec<ServerCount>,
    /// Servers whose configuration declares tools that do not exist
    pub remove_extra_tools: Vec<ServerCount>,
    /// Discovered servers that have no configuration entry
    pub configure_new_servers: Vec<ServerCount>,
    /// Servers that exported zero tools, in name order
    pub fix_broken_servers: Vec<ServerId>,
}

impl Recommendations {
    /// Returns `true` if there is nothing to act on.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.add_missing_tools.is_empty()
            && self.remove_extra_tools.is_empty()
            && self.configure_new_servers.is_empty()
            && self.fix_broken_servers.is_empty()
    }
}

impl Analysis {
    /// Number of servers per status, ordered by status name.
    #[must_use]
    pub fn status_counts(&self) -> BTreeMap<ServerStatus, usize> {
        let mut counts = BTreeMap::new();
        for record in self.servers.values() {
            *counts.entry(record.status).or_insert(0) += 1;
        }
        counts
    }

    /// Groups servers into action buckets.
    ///
    /// A server with `MixedDifferences` lands in both the missing and the
    /// extra bucket.
    #[must_use]
    pub fn recommendations(&self) -> Recommendations {
        let mut recs = Recommendations::default();

        for (server, record) in &self.servers {
            let count = |count: usize| ServerCount {
                server: server.clone(),
                count,
            };

            if matches!(
                record.status,
                ServerStatus::MissingTools | ServerStatus::MixedDifferences
            ) && !record.missing_from_config.is_empty()
            {
                recs.add_missing_tools
                    .push(count(record.missing_from_config.len()));
            }

            if matches!(
                record.status,
                ServerStatus::ExtraTools | ServerStatus::MixedDifferences
            ) && !record.extra_in_config.is_empty()
            {
                recs.remove_extra_tools
                    .push(count(record.extra_in_config.len()));
            }

            match record.status {
                ServerStatus::DiscoveredButNotConfigured => {
                    recs.configure_new_servers
                        .push(count(record.discovered_count));
                }
                ServerStatus::NoToolsDiscovered => recs.fix_broken_servers.push(server.clone()),
                _ => {}
            }
        }

        for bucket in [
            &mut recs.add_missing_tools,
            &mut recs.remove_extra_tools,
            &mut recs.configure_new_servers,
        ] {
            // Stable: equal counts keep name order.
            bucket.sort_by(|a, b| b.count.cmp(&a.count));
        }
        recs
    }

    /// Serializes the analysis as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError {
            message: "failed to serialize analysis".to_string(),
            source: Some(e),
        })
    }

    /// Writes the analysis to `path` as UTF-8 JSON.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails or `Io` if the file
    /// cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), servers = self.servers.len(), "analysis written");
        Ok(())
    }
}

/// Compares discovered and configured tools for every server either side names.
#[must_use]
pub fn compare(discovered: &ToolInventory, configured: &ToolInventory) -> Analysis {
    let summary = Summary {
        total_servers_discovered: discovered.len(),
        total_servers_configured: configured.len(),
        total_tools_discovered: discovered.values().map(Vec::len).sum(),
        total_tools_configured: configured.values().map(Vec::len).sum(),
    };

    let disc_sets = to_sets(discovered);
    let conf_sets = to_sets(configured);

    let names: BTreeSet<&ServerId> = discovered.keys().chain(configured.keys()).collect();
    let servers: BTreeMap<ServerId, ServerRecord> = names
        .into_iter()
        .map(|name| {
            let record = ServerRecord::new(disc_sets.get(name), conf_sets.get(name));
            (name.clone(), record)
        })
        .collect();

    debug!(
        servers = servers.len(),
        tools_discovered = summary.total_tools_discovered,
        tools_configured = summary.total_tools_configured,
        "comparison complete"
    );

    Analysis { summary, servers }
}

fn to_sets(inventory: &ToolInventory) -> BTreeMap<&ServerId, ToolSet> {
    inventory
        .iter()
        .map(|(name, tools)| (name, tools.iter().cloned().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn names(tools: &[ToolName]) -> Vec<&str> {
        tools.iter().map(ToolName::as_str).collect()
    }

    fn record<'a>(analysis: &'a Analysis, server: &str) -> &'a ServerRecord {
        &analysis.servers[&ServerId::new(server)]
    }

    #[test]
    fn test_reference_example() {
        let discovered = inventory(&[("alpha", &["x", "y"])]);
        let configured = inventory(&[("alpha", &["x"]), ("beta", &[])]);

        let analysis = compare(&discovered, &configured);

        assert_eq!(
            analysis.summary,
            Summary {
                total_servers_discovered: 1,
                total_servers_configured: 2,
                total_tools_discovered: 2,
                total_tools_configured: 1,
            }
        );

        let alpha = record(&analysis, "alpha");
        assert_eq!(alpha.status, ServerStatus::MissingTools);
        assert_eq!(names(&alpha.missing_from_config), ["y"]);
        assert!(alpha.extra_in_config.is_empty());
        assert_eq!(names(&alpha.matching_tools), ["x"]);
        assert_eq!(alpha.matching_count, 1);

        let beta = record(&analysis, "beta");
        assert_eq!(beta.status, ServerStatus::ConfiguredButNotDiscovered);
    }

    #[test]
    fn test_server_keys_are_sorted_union() {
        let discovered = inventory(&[("c", &["t"]), ("a", &["t"])]);
        let configured = inventory(&[("b", &["t"]), ("a", &["t"])]);

        let analysis = compare(&discovered, &configured);
        let keys: Vec<_> = analysis.servers.keys().map(ServerId::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_partitions_cover_both_sides() {
        let discovered = inventory(&[("s", &["a", "b", "c", "d"])]);
        let configured = inventory(&[("s", &["c", "d", "e"])]);

        let rec = compare(&discovered, &configured).servers[&ServerId::new("s")].clone();

        let mut disc: Vec<_> = rec.matching_tools.clone();
        disc.extend(rec.missing_from_config.clone());
        disc.sort();
        assert_eq!(names(&disc), ["a", "b", "c", "d"]);

        let mut conf: Vec<_> = rec.matching_tools.clone();
        conf.extend(rec.extra_in_config.clone());
        conf.sort();
        assert_eq!(names(&conf), ["c", "d", "e"]);

        assert_eq!(rec.status, ServerStatus::MixedDifferences);
    }

    #[test]
    fn test_counts_are_deduplicated_per_server() {
        let discovered = inventory(&[("s", &["a", "a", "b"])]);
        let configured = inventory(&[("s", &["a", "b"])]);

        let analysis = compare(&discovered, &configured);
        let rec = record(&analysis, "s");
        assert_eq!(rec.discovered_count, 2);
        assert_eq!(rec.configured_count, 2);
        assert_eq!(rec.status, ServerStatus::PerfectMatch);
        // Totals count list entries as exported.
        assert_eq!(analysis.summary.total_tools_discovered, 3);
    }

    #[test]
    fn test_perfect_match_has_empty_differences() {
        let tools: &[&str] = &["x", "y"];
        let analysis = compare(&inventory(&[("s", tools)]), &inventory(&[("s", tools)]));
        let rec = record(&analysis, "s");
        assert_eq!(rec.status, ServerStatus::PerfectMatch);
        assert!(rec.missing_from_config.is_empty());
        assert!(rec.extra_in_config.is_empty());
    }

    #[test]
    fn test_configured_only_ignores_tool_count() {
        let analysis = compare(&inventory(&[]), &inventory(&[("ghost", &["a", "b", "c"])]));
        let rec = record(&analysis, "ghost");
        assert_eq!(rec.status, ServerStatus::ConfiguredButNotDiscovered);
        assert_eq!(names(&rec.extra_in_config), ["a", "b", "c"]);
        assert_eq!(rec.discovered_count, 0);
    }

    #[test]
    fn test_empty_discovery_is_no_tools_discovered() {
        let analysis = compare(&inventory(&[("s", &[])]), &inventory(&[("s", &[])]));
        assert_eq!(record(&analysis, "s").status, ServerStatus::NoToolsDiscovered);

        let analysis = compare(&inventory(&[("s", &[])]), &inventory(&[("s", &["a"])]));
        assert_eq!(record(&analysis, "s").status, ServerStatus::NoToolsDiscovered);
    }

    #[test]
    fn test_discovered_only() {
        let analysis = compare(&inventory(&[("new", &["a", "b"])]), &inventory(&[]));
        let rec = record(&analysis, "new");
        assert_eq!(rec.status, ServerStatus::DiscoveredButNotConfigured);
        assert_eq!(names(&rec.missing_from_config), ["a", "b"]);
    }

    #[test]
    fn test_empty_inputs() {
        let analysis = compare(&ToolInventory::new(), &ToolInventory::new());
        assert_eq!(analysis, Analysis::default());
        assert!(analysis.recommendations().is_empty());
    }

    #[test]
    fn test_status_counts() {
        let discovered = inventory(&[("a", &["x"]), ("b", &["x"]), ("c", &[])]);
        let configured = inventory(&[("a", &["x"]), ("b", &["x"]), ("c", &[]), ("d", &[])]);

        let counts = compare(&discovered, &configured).status_counts();
        let listed: Vec<_> = counts.iter().map(|(s, n)| (s.as_str(), *n)).collect();
        assert_eq!(
            listed,
            [
                ("configured_but_not_discovered", 1),
                ("no_tools_discovered", 1),
                ("perfect_match", 2),
            ]
        );
    }

    #[test]
    fn test_recommendations() {
        let discovered = inventory(&[
            ("broken", &[]),
            ("few", &["a", "b"]),
            ("many", &["a", "b", "c", "d"]),
            ("mixed", &["a", "b"]),
            ("new", &["a", "b", "c"]),
            ("stale", &["a"]),
        ]);
        let configured = inventory(&[
            ("broken", &[]),
            ("few", &["a"]),
            ("many", &["a"]),
            ("mixed", &["a", "z"]),
            ("stale", &["a", "old1", "old2"]),
        ]);

        let recs = compare(&discovered, &configured).recommendations();

        let ranked = |bucket: &[ServerCount]| -> Vec<(String, usize)> {
            bucket
                .iter()
                .map(|e| (e.server.to_string(), e.count))
                .collect()
        };

        assert_eq!(
            ranked(&recs.add_missing_tools),
            [
                ("many".to_string(), 3),
                ("few".to_string(), 1),
                ("mixed".to_string(), 1)
            ]
        );
        assert_eq!(
            ranked(&recs.remove_extra_tools),
            [("stale".to_string(), 2), ("mixed".to_string(), 1)]
        );
        assert_eq!(ranked(&recs.configure_new_servers), [("new".to_string(), 3)]);
        assert_eq!(recs.fix_broken_servers, [ServerId::new("broken")]);
        assert!(!recs.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let discovered = inventory(&[("alpha", &["y", "x"]), ("gamma", &[])]);
        let configured = inventory(&[("alpha", &["x", "w"]), ("beta", &[])]);
        let analysis = compare(&discovered, &configured);

        let json = analysis.to_json_pretty().unwrap();
        assert!(json.contains("\n  \"summary\": {"));
        assert!(json.contains("\"status\": \"mixed_differences\""));

        let back: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        let analysis = compare(&inventory(&[("a", &["x"])]), &inventory(&[("a", &["x"])]));

        analysis.write_json(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let back: Analysis = serde_json::from_str(&written).unwrap();
        assert_eq!(back, analysis);
    }

    #[test]
    fn test_write_json_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("analysis.json");

        let err = Analysis::default().write_json(&path).unwrap_err();
        assert!(err.is_io_error());
    }
}
