//! Per-server classification tags.

use crate::types::ToolSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Outcome of comparing one server's discovered and configured tools.
///
/// Exactly one status applies per server. Serialized in `snake_case`, and
/// ordered by that serialized name so histograms list statuses alphabetically.
///
/// # Examples
///
/// ```
/// use mcp_toolcheck_core::ServerStatus;
///
/// let status: ServerStatus = "perfect_match".parse()?;
/// assert_eq!(status, ServerStatus::PerfectMatch);
/// assert_eq!(status.title(), "Perfect Match");
/// # Ok::<(), mcp_toolcheck_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    /// Declared in the configuration but absent from the export.
    ConfiguredButNotDiscovered,
    /// Exported but absent from the configuration.
    DiscoveredButNotConfigured,
    /// Present in the export with an empty tool list.
    NoToolsDiscovered,
    /// Both sides declare the same tools.
    PerfectMatch,
    /// Discovered tools are missing from the configuration.
    MissingTools,
    /// The configuration declares tools that were not discovered.
    ExtraTools,
    /// Both missing and extra tools.
    MixedDifferences,
}

impl ServerStatus {
    /// All statuses, in precedence order.
    pub const ALL: [Self; 7] = [
        Self::ConfiguredButNotDiscovered,
        Self::DiscoveredButNotConfigured,
        Self::NoToolsDiscovered,
        Self::PerfectMatch,
        Self::MissingTools,
        Self::ExtraTools,
        Self::MixedDifferences,
    ];

    /// Classifies a server; the first matching rule wins.
    ///
    /// `discovered` and `configured` are `None` when the server name is absent
    /// from that source. An empty set is present, not absent: a server whose
    /// export lists no tools is `NoToolsDiscovered` even if its configuration
    /// is empty too.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_toolcheck_core::{ServerStatus, ToolSet};
    ///
    /// let empty = ToolSet::new();
    /// let status = ServerStatus::classify(None, Some(&empty), &empty, &empty);
    /// assert_eq!(status, ServerStatus::ConfiguredButNotDiscovered);
    ///
    /// let status = ServerStatus::classify(Some(&empty), Some(&empty), &empty, &empty);
    /// assert_eq!(status, ServerStatus::NoToolsDiscovered);
    /// ```
    #[must_use]
    pub fn classify(
        discovered: Option<&ToolSet>,
        configured: Option<&ToolSet>,
        missing: &ToolSet,
        extra: &ToolSet,
    ) -> Self {
        let Some(discovered) = discovered else {
            return Self::ConfiguredButNotDiscovered;
        };
        if configured.is_none() {
            return Self::DiscoveredButNotConfigured;
        }
        if discovered.is_empty() {
            return Self::NoToolsDiscovered;
        }
        match (missing.is_empty(), extra.is_empty()) {
            (true, true) => Self::PerfectMatch,
            (false, true) => Self::MissingTools,
            (true, false) => Self::ExtraTools,
            (false, false) => Self::MixedDifferences,
        }
    }

    /// Returns the serialized tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfiguredButNotDiscovered => "configured_but_not_discovered",
            Self::DiscoveredButNotConfigured => "discovered_but_not_configured",
            Self::NoToolsDiscovered => "no_tools_discovered",
            Self::PerfectMatch => "perfect_match",
            Self::MissingTools => "missing_tools",
            Self::ExtraTools => "extra_tools",
            Self::MixedDifferences => "mixed_differences",
        }
    }

    /// Tag with underscores replaced by spaces, e.g. `missing tools`.
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Title-cased label, e.g. `Missing Tools`.
    #[must_use]
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Marker shown in front of the status in reports.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::PerfectMatch => "✅",
            Self::MissingTools => "⚠️ ",
            Self::ExtraTools => "🔧",
            Self::MixedDifferences => "🔄",
            Self::NoToolsDiscovered => "❌",
            Self::DiscoveredButNotConfigured => "🆕",
            Self::ConfiguredButNotDiscovered => "👻",
        }
    }
}

impl PartialOrd for ServerStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServerStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| crate::Error::InvalidArgument(format!("unknown server status: '{s}'")))
    }
}
