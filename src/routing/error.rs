//! Route table error types

use thiserror::Error;

/// Errors raised while building a route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Pattern does not start with '/'
    #[error("Route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// A ':' segment with no name
    #[error("Empty parameter name in route pattern: {0}")]
    EmptyParam(String),

    /// The same parameter name used twice
    #[error("Parameter '{name}' appears more than once in {pattern}")]
    DuplicateParam { pattern: String, name: String },

    /// Pattern would match exactly the same paths as an existing one
    #[error("Route pattern {new} overlaps existing pattern {existing}")]
    Ambiguous { new: String, existing: String },
}

/// Result type alias for routing operations
pub type RouteResult<T> = Result<T, RouteError>;
