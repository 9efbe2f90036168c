//! Server Error Types
//!
//! Startup and runtime failures of the static host. Handlers themselves
//! never fail: every request gets a file or the shell.

use std::path::PathBuf;
use thiserror::Error;

/// Static host error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// The dist directory has no index.html
    #[error("Application shell not found at {0:?} (build folio-ui first)")]
    MissingShell(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_shell_message() {
        let err = ServerError::MissingShell(PathBuf::from("dist/index.html"));
        assert_eq!(
            err.to_string(),
            "Application shell not found at \"dist/index.html\" (build folio-ui first)"
        );
    }

    #[test]
    fn test_bind_failure_converts_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ServerError = io.into();
        assert!(matches!(err, ServerError::Io(_)));
        assert_eq!(err.to_string(), "IO error: address in use");
    }
}
