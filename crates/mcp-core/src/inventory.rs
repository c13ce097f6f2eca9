//! Loaders for the two tool inventories.
//!
//! Two documents describe the same servers from different angles:
//!
//! - the **discovered** export, produced by introspecting running servers:
//!
//!   ```json
//!   {"servers": [{"name": "github", "tools": [{"name": "search"}]}]}
//!   ```
//!
//! - the hand-maintained **configuration**:
//!
//!   ```json
//!   {"servers": {"github": {"tools": {"search": {}}}, "memory": {}}}
//!   ```
//!
//! Both are reduced to a [`ToolInventory`]. Fields other than server and tool
//! names are ignored.

use crate::error::{Error, Result};
use crate::types::{ServerId, ToolInventory, ToolName};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const INLINE_SOURCE: &str = "<input>";

#[derive(Debug, Deserialize)]
struct DiscoveredExport {
    servers: Vec<DiscoveredServer>,
}

#[derive(Debug, Deserialize)]
struct DiscoveredServer {
    name: ServerId,
    tools: Vec<DiscoveredTool>,
}

#[derive(Debug, Deserialize)]
struct DiscoveredTool {
    name: ToolName,
}

#[derive(Debug, Deserialize)]
struct ServersConfig {
    servers: BTreeMap<ServerId, ServerEntry>,
}

#[derive(Debug, Deserialize)]
struct ServerEntry {
    // Values are arbitrary per-tool settings; only the keys matter here.
    #[serde(default)]
    tools: BTreeMap<ToolName, IgnoredAny>,
}

/// Reduces a parsed document to server and tool names.
trait IntoInventory {
    fn into_inventory(self) -> ToolInventory;
}

impl IntoInventory for DiscoveredExport {
    fn into_inventory(self) -> ToolInventory {
        // A repeated server name keeps the last entry.
        self.servers
            .into_iter()
            .map(|server| {
                let tools = server.tools.into_iter().map(|tool| tool.name).collect();
                (server.name, tools)
            })
            .collect()
    }
}

impl IntoInventory for ServersConfig {
    fn into_inventory(self) -> ToolInventory {
        self.servers
            .into_iter()
            .map(|(name, entry)| (name, entry.tools.into_keys().collect()))
            .collect()
    }
}

/// Fails with [`Error::FileNotFound`] if `path` does not exist.
///
/// # Errors
///
/// Returns `FileNotFound` naming the path.
pub fn ensure_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Loads the discovered-tools export from disk.
///
/// Tool lists keep source order and duplicates.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing, `Io` if it cannot be read,
/// and `Parse` if it is not valid JSON or lacks `servers`, `name` or `tools`.
pub fn load_discovered(path: impl AsRef<Path>) -> Result<ToolInventory> {
    let path = path.as_ref();
    let contents = read(path)?;
    let inventory = decode::<DiscoveredExport>(&contents, path)?;
    debug!(
        path = %path.display(),
        servers = inventory.len(),
        "loaded discovered tools"
    );
    Ok(inventory)
}

/// Loads the servers configuration from disk.
///
/// A server without a `tools` object maps to an empty list.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing, `Io` if it cannot be read,
/// and `Parse` if it is not valid JSON, lacks the `servers` object, or has a
/// `tools` value that is not an object.
pub fn load_configured(path: impl AsRef<Path>) -> Result<ToolInventory> {
    let path = path.as_ref();
    let contents = read(path)?;
    let inventory = decode::<ServersConfig>(&contents, path)?;
    debug!(
        path = %path.display(),
        servers = inventory.len(),
        "loaded configured tools"
    );
    Ok(inventory)
}

/// Parses a discovered-tools export from a string.
///
/// # Errors
///
/// Returns `Parse` if the document is malformed.
///
/// # Examples
///
/// ```
/// use mcp_toolcheck_core::{ServerId, parse_discovered};
///
/// let inventory = parse_discovered(
///     r#"{"servers": [{"name": "alpha", "tools": [{"name": "x"}, {"name": "y"}]}]}"#,
/// )?;
/// assert_eq!(inventory[&ServerId::new("alpha")].len(), 2);
/// # Ok::<(), mcp_toolcheck_core::Error>(())
/// ```
pub fn parse_discovered(json: &str) -> Result<ToolInventory> {
    decode::<DiscoveredExport>(json, Path::new(INLINE_SOURCE))
}

/// Parses a servers configuration from a string.
///
/// # Errors
///
/// Returns `Parse` if the document is malformed.
///
/// # Examples
///
/// ```
/// use mcp_toolcheck_core::{ServerId, parse_configured};
///
/// let inventory = parse_configured(r#"{"servers": {"alpha": {"tools": {"x": {}}}, "beta": {}}}"#)?;
/// assert_eq!(inventory[&ServerId::new("alpha")].len(), 1);
/// assert!(inventory[&ServerId::new("beta")].is_empty());
/// # Ok::<(), mcp_toolcheck_core::Error>(())
/// ```
pub fn parse_configured(json: &str) -> Result<ToolInventory> {
    decode::<ServersConfig>(json, Path::new(INLINE_SOURCE))
}

fn read(path: &Path) -> Result<String> {
    ensure_exists(path)?;
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn decode<T>(json: &str, path: &Path) -> Result<ToolInventory>
where
    T: DeserializeOwned + IntoInventory,
{
    serde_json::from_str::<T>(json)
        .map(IntoInventory::into_inventory)
        .map_err(|source| Error::Parse {
            path: PathBuf::from(path),
            source,
        })
}
