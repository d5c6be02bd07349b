//! `.cube` 3D LUT format support.
//!
//! The `.cube` format is a simple text-based LUT format widely supported
//! by DaVinci Resolve, Adobe applications, and many other tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! The parser here is deliberately lenient, matching how grading tools
//! write these files in practice: keywords are case-insensitive, domain
//! bounds are accepted and discarded (the bake pipeline always works in
//! normalized [0,1]), and data lines whose leading tokens are not numeric
//! are skipped rather than rejected. The only hard failure is a triple
//! count that does not match the declared or inferred resolution.

use crate::{Lut3D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a 3D LUT from a `.cube` file.
///
/// # Example
///
/// ```rust,ignore
/// let lut = cube::read("grade.cube")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<Lut3D> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse(BufReader::new(file), path)
}

/// Parses a 3D LUT from a reader.
///
/// `path` is used for error reporting only.
pub fn parse<R: BufRead>(reader: R, path: &Path) -> LutResult<Lut3D> {
    let mut size: Option<usize> = None;
    let mut data: Vec<[f32; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let upper = line.to_ascii_uppercase();
        if upper.starts_with("TITLE") {
            continue;
        }
        if upper.starts_with("LUT_3D_SIZE") {
            // Duplicate directives are not rejected; the last one wins.
            size = Some(parse_size(line)?);
            continue;
        }
        if upper.starts_with("DOMAIN_MIN") || upper.starts_with("DOMAIN_MAX") {
            continue;
        }

        if let Some(triple) = parse_triple(line) {
            data.push(triple);
        }
    }

    // No size directive: infer from the payload.
    let size = match size {
        Some(s) => s,
        None => (data.len() as f64).cbrt().round() as usize,
    };

    let expected = size * size * size;
    if data.len() != expected {
        return Err(LutError::Malformed {
            path: path.to_path_buf(),
            expected,
            actual: data.len(),
        });
    }

    Lut3D::from_data(data, size)
}

fn parse_size(line: &str) -> LutResult<usize> {
    let mut parts = line.split_whitespace();
    parts.next();
    parts
        .next()
        .ok_or_else(|| LutError::Parse("missing size value".into()))?
        .parse()
        .map_err(|_| LutError::Parse("invalid size value".into()))
}

/// First three whitespace tokens as floats, or `None` when the line is
/// not a data line.
fn parse_triple(line: &str) -> Option<[f32; 3]> {
    let mut tokens = line.split_whitespace();
    let r = tokens.next()?.parse().ok()?;
    let g = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    Some([r, g, b])
}
