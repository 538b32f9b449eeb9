//! # twconf Errors
//!
//! Error taxonomy for the build configuration loader.
//!
//! Two failure families exist:
//! - [`ResolutionError`]: a reference in the configuration (plugin name or
//!   content pattern) cannot be found in the surrounding environment
//! - [`MalformedConfigError`]: the configuration record itself violates the
//!   expected shape or an invariant
//!
//! Uses `thiserror` for structured error definitions with named fields.

use thiserror::Error;

/// A named reference in the configuration could not be resolved.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Unknown plugin: {name}")]
    UnknownPlugin { name: String },

    #[error("Content pattern matched no files: {pattern}")]
    UnmatchedPattern { pattern: String },
}

/// The configuration record does not match the expected shape.
#[derive(Debug, Error)]
pub enum MalformedConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Content list must contain at least one pattern")]
    EmptyContent,

    #[error("Invalid glob pattern: {pattern}: {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("Unexpected configuration shape: {reason}")]
    UnexpectedShape { reason: String },
}
