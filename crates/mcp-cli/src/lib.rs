//! MCP tool check CLI library.
//!
//! Exposes argument parsing, reporters and the run loop so they can be
//! tested without spawning the binary.

#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod formatters;
pub mod report;
pub mod runner;

pub use cli::Cli;
