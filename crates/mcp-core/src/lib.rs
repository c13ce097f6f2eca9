//! Core types, loaders and comparison for MCP tool inventories.
//!
//! This crate reconciles what MCP servers actually expose (a discovered-tools
//! export) with what a hand-maintained configuration declares.
//!
//! # Architecture
//!
//! - Strong domain types (`ServerId`, `ToolName`) and inventories
//! - Loaders for the export and the configuration documents
//! - A pure comparator producing an [`Analysis`] with one [`ServerStatus`]
//!   per server
//! - Error hierarchy with the offending path attached
//!
//! # Examples
//!
//! ```
//! use mcp_toolcheck_core::{compare, parse_configured, parse_discovered};
//!
//! let discovered = parse_discovered(r#"{"servers": [{"name": "a", "tools": [{"name": "t"}]}]}"#)?;
//! let configured = parse_configured(r#"{"servers": {"a": {"tools": {"t": {}}}}}"#)?;
//!
//! let analysis = compare(&discovered, &configured);
//! assert!(analysis.recommendations().is_empty());
//! # Ok::<(), mcp_toolcheck_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod analysis;
mod error;
mod inventory;
mod status;
mod types;

pub mod cli;

pub use analysis::{Analysis, Recommendations, ServerCount, ServerRecord, Summary, compare};
pub use error::{Error, Result};
pub use inventory::{
    ensure_exists, load_configured, load_discovered, parse_configured, parse_discovered,
};
pub use status::ServerStatus;
pub use types::{ServerId, ToolInventory, ToolName, ToolSet};
