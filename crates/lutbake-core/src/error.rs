//! LUT error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while loading or building LUT grids.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid grid size for the supplied data.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Parsed sample count does not match the declared or inferred resolution.
    #[error("{}: expected {expected} triples, found {actual}", .path.display())]
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// Triple count required by the resolution (N^3).
        expected: usize,
        /// Triple count actually parsed.
        actual: usize,
    },

    /// Malformed directive in a LUT file.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
