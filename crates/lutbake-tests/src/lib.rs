//! Integration tests for the lutbake workspace.
//!
//! End-to-end coverage of the bake pipeline: config loading, input
//! discovery, parsing, resampling, and artifact emission working together
//! over real files.
