//! Generated-source rendering for baked collections.
//!
//! The artifact is a set of Rust modules: one payload module per
//! collection (the `static` float arrays plus a `Lut3dRef` table) and a
//! shared registry module (`mod.rs`) carrying the `Lut3dRef` type, the
//! target resolution, display-name lists, and the selector strings the
//! host UI builds its popup controls from.

use crate::bake::BakedCollection;
use crate::collection::sanitize;
use crate::GenResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Floats per emitted array line.
const VALUES_PER_LINE: usize = 9;

/// Identifier prefix for a collection, e.g. `log` -> `LOG`.
fn prefix(collection: &str) -> String {
    sanitize(collection).to_uppercase()
}

/// Payload module stem for a collection, e.g. `log` -> `log_data`.
fn module_stem(collection: &str) -> String {
    format!("{}_data", sanitize(collection).to_lowercase())
}

/// Static array identifier for one LUT, e.g. `LOG_LUT_CONVERT_SONY`.
fn array_ident(collection: &str, lut_name: &str) -> String {
    format!("{}_LUT_{}", prefix(collection), sanitize(lut_name).to_uppercase())
}

/// Display names joined for a popup control, behind a "none" sentinel.
pub fn popup_string<S: AsRef<str>>(names: &[S]) -> String {
    let mut parts = vec!["None".to_string()];
    parts.extend(names.iter().map(|n| n.as_ref().to_string()));
    parts.join("|")
}

/// `selected/total` pairs for every possible count from 0 to `total`.
pub fn selected_popup_string(total: usize) -> String {
    (0..=total)
        .map(|i| format!("{i}/{total}"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Renders a collection's payload module.
pub fn render_data_module(collection: &BakedCollection, size: usize) -> String {
    let pfx = prefix(&collection.name);
    let mut out = String::new();

    out.push_str(&format!(
        "//! LUT payload for the `{}` collection.\n//!\n//! Generated by lutbake - do not edit.\n\n",
        collection.name
    ));
    out.push_str("use super::Lut3dRef;\n\n");

    for lut in &collection.luts {
        let ident = array_ident(&collection.name, &lut.name);
        let floats = 3 * lut.lut.data.len();
        out.push_str(&format!("pub static {ident}: [f32; {floats}] = [\n"));

        let mut line = String::new();
        let mut on_line = 0;
        for value in lut.lut.data.iter().flatten() {
            line.push_str(&format!("{value:.6},"));
            on_line += 1;
            if on_line == VALUES_PER_LINE {
                line.push('\n');
                out.push_str(&line);
                line.clear();
                on_line = 0;
            }
        }
        if !line.is_empty() {
            line.push('\n');
            out.push_str(&line);
        }
        out.push_str("];\n\n");
    }

    out.push_str(&format!(
        "pub static {pfx}_LUTS: [Lut3dRef; {}] = [\n",
        collection.luts.len()
    ));
    for lut in &collection.luts {
        out.push_str(&format!(
            "    Lut3dRef {{ data: &{}, size: {size} }},\n",
            array_ident(&collection.name, &lut.name)
        ));
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "pub const {pfx}_LUT_COUNT: usize = {};\n",
        collection.luts.len()
    ));

    out
}

/// Renders the shared registry module (`mod.rs`).
pub fn render_registry_module(collections: &[BakedCollection], size: usize) -> String {
    let mut out = String::new();

    out.push_str("//! Baked LUT registry.\n//!\n//! Generated by lutbake - do not edit.\n\n");

    for collection in collections {
        out.push_str(&format!("pub mod {};\n", module_stem(&collection.name)));
    }
    out.push('\n');

    out.push_str("/// One baked 3D LUT: `size` lattice points per axis, `3 * size^3` floats.\n");
    out.push_str("#[derive(Debug, Clone, Copy)]\n");
    out.push_str("pub struct Lut3dRef {\n");
    out.push_str("    /// Flattened RGB triples, last axis fastest.\n");
    out.push_str("    pub data: &'static [f32],\n");
    out.push_str("    /// Per-axis lattice point count.\n");
    out.push_str("    pub size: usize,\n");
    out.push_str("}\n\n");

    out.push_str("/// Lattice resolution shared by every baked LUT.\n");
    out.push_str(&format!("pub const LUT_SIZE: usize = {size};\n\n"));

    for collection in collections {
        let pfx = prefix(&collection.name);
        out.push_str(&format!(
            "pub use {}::{{{pfx}_LUTS, {pfx}_LUT_COUNT}};\n",
            module_stem(&collection.name)
        ));
    }
    out.push('\n');

    for collection in collections {
        let pfx = prefix(&collection.name);
        let names: Vec<&str> = collection.luts.iter().map(|l| l.name.as_str()).collect();

        out.push_str(&format!(
            "pub static {pfx}_LUT_NAMES: [&str; {}] = [\n",
            names.len()
        ));
        for name in &names {
            out.push_str(&format!("    {name:?},\n"));
        }
        out.push_str("];\n");

        out.push_str(&format!(
            "pub static {pfx}_POPUP: &str = {:?};\n",
            popup_string(&names)
        ));
        out.push_str(&format!(
            "pub static {pfx}_SELECTED_POPUP: &str = {:?};\n\n",
            selected_popup_string(names.len())
        ));
    }

    out
}

/// Writes the full artifact under `out_dir`.
///
/// Every module is rendered in memory first; the filesystem is only
/// touched once all collections have rendered, so a failed bake never
/// leaves a partial artifact behind.
pub fn write_artifact(
    out_dir: &Path,
    collections: &[BakedCollection],
    size: usize,
) -> GenResult<()> {
    let registry = render_registry_module(collections, size);
    let modules: Vec<(PathBuf, String)> = collections
        .iter()
        .map(|c| {
            (
                out_dir.join(format!("{}.rs", module_stem(&c.name))),
                render_data_module(c, size),
            )
        })
        .collect();

    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join("mod.rs"), registry)?;
    for (path, text) in modules {
        fs::write(path, text)?;
    }
    Ok(())
}
