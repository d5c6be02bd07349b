//! Bake pipeline error types.

use lutbake_core::LutError;
use thiserror::Error;

/// Result type for bake operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while resolving, baking, or emitting collections.
#[derive(Debug, Error)]
pub enum GenError {
    /// A curated collection names inputs that do not exist on disk.
    #[error("collection '{collection}' is missing required inputs: {}", .names.join(", "))]
    MissingInputs {
        /// Collection whose curated order could not be satisfied.
        collection: String,
        /// Every missing name, in curated order.
        names: Vec<String>,
    },

    /// LUT parse or load failure.
    #[error(transparent)]
    Lut(#[from] LutError),

    /// Invalid file discovery pattern.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Malformed configuration file.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
