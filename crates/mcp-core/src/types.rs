//! Strong domain types for MCP tool comparison.
//!
//! Server and tool names are newtypes over `String` so the two can never be
//! swapped by accident. Both are totally ordered; every collection in this
//! crate iterates in name order.
//!
//! # Examples
//!
//! ```
//! use mcp_toolcheck_core::{ServerId, ToolName, ToolSet};
//!
//! let server = ServerId::new("github");
//! let tools: ToolSet = ["search", "create_issue", "search"]
//!     .into_iter()
//!     .map(ToolName::from)
//!     .collect();
//!
//! assert_eq!(server.as_str(), "github");
//! assert_eq!(tools.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Server name as it appears in both the export and the configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    /// Creates a new server identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_toolcheck_core::ServerId;
    ///
    /// let id = ServerId::new("my-server");
    /// assert_eq!(id, ServerId::from(String::from("my-server")));
    /// ```
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the server name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ServerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Tool name; identity for comparison purposes is the name alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    /// Creates a new tool name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tool name as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_toolcheck_core::ToolName;
    ///
    /// let name = ToolName::new("send_message");
    /// assert_eq!(name.as_str(), "send_message");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ToolName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ToolName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// De-duplicated, sorted set of tool names for one server from one source.
pub type ToolSet = BTreeSet<ToolName>;

/// Loader output: server name to tool names in source order.
///
/// Lists may contain duplicates; sets are derived during comparison.
pub type ToolInventory = BTreeMap<ServerId, Vec<ToolName>>;
