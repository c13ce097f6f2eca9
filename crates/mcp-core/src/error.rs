//! Error types for MCP tool comparison.
//!
//! Every failure in the library surfaces as [`Error`]. Loader errors carry the
//! path of the document that failed so the CLI can report it verbatim.
//!
//! # Examples
//!
//! ```
//! use mcp_toolcheck_core::{Error, Result};
//! use std::path::PathBuf;
//!
//! fn require(path: &str) -> Result<()> {
//!     Err(Error::FileNotFound {
//!         path: PathBuf::from(path),
//!     })
//! }
//!
//! let err = require("discovered-tools.json").unwrap_err();
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "discovered-tools.json not found");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for MCP tool comparison.
#[derive(Error, Debug)]
pub enum Error {
    /// Input document does not exist.
    ///
    /// Checked before any read or parse is attempted.
    #[error("{} not found", path.display())]
    FileNotFound {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// Reading or writing a document failed.
    #[error("failed to access {}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON or lacks the expected keys.
    #[error("failed to parse {}", path.display())]
    Parse {
        /// Path of the malformed document
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the analysis failed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or parsed values are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if an input document was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_toolcheck_core::Error;
    ///
    /// let err = Error::FileNotFound { path: "servers-config.json".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if a document could not be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_toolcheck_core::parse_discovered;
    ///
    /// let err = parse_discovered("{ not json").unwrap_err();
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias for tool comparison operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_detection() {
        let err = Error::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert!(err.is_not_found());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.to_string(), "missing.json not found");
    }

    #[test]
    fn test_io_error_detection() {
        let err = Error::Io {
            path: PathBuf::from("out.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_io_error());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "failed to access out.json");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_parse_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Parse {
            path: PathBuf::from("broken.json"),
            source,
        };
        assert!(err.is_parse_error());
        assert_eq!(format!("{err}"), "failed to parse broken.json");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serialization_error_display() {
        let err = Error::SerializationError {
            message: "boom".to_string(),
            source: None,
        };
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "Serialization error: boom");
    }

    #[test]
    fn test_result_alias() {
        #[allow(clippy::unnecessary_wraps)]
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(Error::InvalidArgument("test error".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }
}
