//! # lutbake-core
//!
//! 3D LUT grid parsing and trilinear resampling.
//!
//! This crate is the pure core of the bake pipeline: it turns a textual
//! `.cube` grid description into a dense in-memory [`Lut3D`] and can
//! re-evaluate that grid at any other lattice resolution. It knows nothing
//! about input discovery, collection ordering, or artifact emission;
//! those live in `lutbake-gen` and the CLI.
//!
//! # Usage
//!
//! ```rust
//! use lutbake_core::Lut3D;
//!
//! // A grid is immutable once built; resampling yields a new grid.
//! let lut = Lut3D::identity(17);
//! let baked = lut.resample(33);
//! assert_eq!(baked.data.len(), 33 * 33 * 33);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `lutbake-gen` - Collection baking and code generation
//! - `lutbake-cli` - The `lutbake` batch tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut3d;
pub mod cube;

pub use error::{LutError, LutResult};
pub use lut3d::Lut3D;
