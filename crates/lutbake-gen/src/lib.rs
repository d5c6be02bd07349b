//! # lutbake-gen
//!
//! Collection discovery, baking, and artifact emission for the `lutbake`
//! batch tool.
//!
//! The pipeline is linear: a [`BakeConfig`] names collections and their
//! ordering policy, [`bake`] resolves each collection's inputs and turns
//! every `.cube` file into a grid at the shared target resolution (via
//! `lutbake-core`), and [`write_artifact`] renders the baked grids into
//! generated Rust modules for the downstream color-grading pipeline.
//!
//! # Dependencies
//!
//! - [`lutbake_core`] - Grid parsing and resampling
//! - [`serde`] / `serde_yaml` - Declarative collection configuration
//! - [`glob`] - Input discovery
//! - [`rayon`] - Parallel per-file baking
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `lutbake-cli` - The `lutbake` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bake;
pub mod codegen;
pub mod collection;
mod error;

pub use bake::{bake, bake_one, BakedCollection, BakedLut};
pub use codegen::{popup_string, selected_popup_string, write_artifact};
pub use collection::{resolve, sanitize, BakeConfig, CollectionConfig, LutSource, Order};
pub use error::{GenError, GenResult};
