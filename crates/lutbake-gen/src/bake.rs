//! Per-collection parse + resample driver.

use crate::collection::{self, CollectionConfig, LutSource};
use crate::GenResult;
use lutbake_core::{cube, Lut3D};
use rayon::prelude::*;

/// A parsed, resampled LUT ready for emission.
#[derive(Debug, Clone)]
pub struct BakedLut {
    /// Display name.
    pub name: String,
    /// Grid at the shared target resolution.
    pub lut: Lut3D,
}

/// A fully baked collection, in artifact order.
#[derive(Debug, Clone)]
pub struct BakedCollection {
    /// Collection name.
    pub name: String,
    /// Baked LUTs, in the collection's resolved order.
    pub luts: Vec<BakedLut>,
}

/// Bakes every collection in `configs` at resolution `size`.
///
/// Every collection's input list is resolved up front, so a curated
/// collection with missing names fails before any file is parsed. The
/// per-file parse + resample work is independent and runs in parallel;
/// results are collected back in input order.
pub fn bake(configs: &[CollectionConfig], size: usize) -> GenResult<Vec<BakedCollection>> {
    let resolved: Vec<(String, Vec<LutSource>)> = configs
        .iter()
        .map(|config| Ok((config.name.clone(), collection::resolve(config)?)))
        .collect::<GenResult<_>>()?;

    let mut collections = Vec::with_capacity(resolved.len());
    for (name, sources) in resolved {
        let luts = sources
            .par_iter()
            .map(|source| bake_one(source, size))
            .collect::<GenResult<Vec<_>>>()?;
        collections.push(BakedCollection { name, luts });
    }
    Ok(collections)
}

/// Parses one `.cube` file and resamples it to `size`.
pub fn bake_one(source: &LutSource, size: usize) -> GenResult<BakedLut> {
    let lut = cube::read(&source.path)?;
    Ok(BakedLut {
        name: source.name.clone(),
        lut: lut.resample(size),
    })
}
