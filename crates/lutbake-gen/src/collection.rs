//! Collection configuration and input discovery.
//!
//! A collection is a named group of `.cube` files with its own ordering
//! policy. The curated policy is an externally supplied name list, so the
//! order ships as configuration rather than code:
//!
//! ```yaml
//! size: 33
//! collections:
//!   - name: log
//!     dir: luts/log
//!     order:
//!       curated:
//!         - Convert Sony
//!         - Dark Forest
//!   - name: rec709
//!     dir: luts/rec709
//!     order: alphabetical
//! ```

use crate::{GenError, GenResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level bake configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BakeConfig {
    /// Target lattice resolution shared by every baked LUT.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Collections, in artifact order.
    pub collections: Vec<CollectionConfig>,
}

fn default_size() -> usize {
    33
}

impl BakeConfig {
    /// Loads a YAML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> GenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

/// One named group of LUTs with a source directory and ordering policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Collection name; also the prefix of the emitted identifiers.
    pub name: String,
    /// Directory holding the collection's `.cube` files.
    pub dir: PathBuf,
    /// Ordering policy.
    pub order: Order,
}

/// Ordering policy for a collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Fixed, curated name order. Every listed name must resolve to
    /// `<name>.cube` in the collection directory.
    Curated(Vec<String>),
    /// Every `.cube` file in the directory, sorted case-insensitively
    /// by file stem.
    Alphabetical,
}

/// A discovered input: display name plus source path.
#[derive(Debug, Clone)]
pub struct LutSource {
    /// Display name (file stem, or the curated name verbatim).
    pub name: String,
    /// Path to the `.cube` file.
    pub path: PathBuf,
}

/// Resolves a collection's ordered input list.
///
/// Ordering is fully decided here, before any file content is read, so
/// downstream work can run in any execution order without affecting the
/// artifact.
pub fn resolve(config: &CollectionConfig) -> GenResult<Vec<LutSource>> {
    match &config.order {
        Order::Curated(names) => resolve_curated(config, names),
        Order::Alphabetical => resolve_alphabetical(config),
    }
}

fn resolve_curated(config: &CollectionConfig, names: &[String]) -> GenResult<Vec<LutSource>> {
    let sources: Vec<LutSource> = names
        .iter()
        .map(|name| LutSource {
            name: name.clone(),
            path: config.dir.join(format!("{name}.cube")),
        })
        .collect();

    // Report every missing name at once, not just the first.
    let missing: Vec<String> = sources
        .iter()
        .filter(|s| !s.path.is_file())
        .map(|s| s.name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(GenError::MissingInputs {
            collection: config.name.clone(),
            names: missing,
        });
    }

    Ok(sources)
}

fn resolve_alphabetical(config: &CollectionConfig) -> GenResult<Vec<LutSource>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for pattern in ["*.cube", "*.CUBE"] {
        let pattern = config.dir.join(pattern);
        let matches = glob::glob(&pattern.to_string_lossy())?;
        paths.extend(matches.filter_map(|r| r.ok()));
    }

    let mut sources: Vec<LutSource> = paths
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            LutSource { name, path }
        })
        .collect();
    sources.sort_by_key(|s| s.name.to_lowercase());

    Ok(sources)
}

/// Sanitizes a display name into an identifier fragment: alphanumerics
/// pass through, everything else becomes `_`, outer `_` are trimmed.
pub fn sanitize(name: &str) -> String {
    let mapped: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    mapped.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_cube(dir: &Path, name: &str) {
        fs::write(
            dir.join(format!("{name}.cube")),
            "LUT_3D_SIZE 1\n0.5 0.5 0.5\n",
        )
        .unwrap();
    }

    #[test]
    fn sanitize_replaces_and_trims() {
        assert_eq!(sanitize("Convert Sony"), "Convert_Sony");
        assert_eq!(sanitize("  Dark-Forest! "), "Dark_Forest");
        assert_eq!(sanitize("Amethyst"), "Amethyst");
    }

    #[test]
    fn curated_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["B", "A", "C"] {
            write_cube(dir.path(), name);
        }
        let config = CollectionConfig {
            name: "log".into(),
            dir: dir.path().to_path_buf(),
            order: Order::Curated(vec!["C".into(), "A".into(), "B".into()]),
        };
        let sources = resolve(&config).unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn curated_missing_lists_every_absent_name() {
        let dir = tempfile::tempdir().unwrap();
        write_cube(dir.path(), "Present");
        let config = CollectionConfig {
            name: "log".into(),
            dir: dir.path().to_path_buf(),
            order: Order::Curated(vec![
                "Gone".into(),
                "Present".into(),
                "AlsoGone".into(),
            ]),
        };
        match resolve(&config) {
            Err(GenError::MissingInputs { collection, names }) => {
                assert_eq!(collection, "log");
                assert_eq!(names, vec!["Gone".to_string(), "AlsoGone".to_string()]);
            }
            other => panic!("expected MissingInputs, got {other:?}"),
        }
    }

    #[test]
    fn alphabetical_sorts_case_insensitively_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["delta", "Alpha", "charlie", "Bravo"] {
            write_cube(dir.path(), name);
        }
        let config = CollectionConfig {
            name: "rec709".into(),
            dir: dir.path().to_path_buf(),
            order: Order::Alphabetical,
        };
        let sources = resolve(&config).unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Bravo", "charlie", "delta"]);
    }

    #[test]
    fn config_parses_both_order_kinds() {
        let yaml = r#"
size: 17
collections:
  - name: log
    dir: luts/log
    order:
      curated:
        - Convert Sony
  - name: rec709
    dir: luts/rec709
    order: alphabetical
"#;
        let config: BakeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.size, 17);
        assert_eq!(config.collections.len(), 2);
        assert!(matches!(config.collections[0].order, Order::Curated(_)));
        assert!(matches!(config.collections[1].order, Order::Alphabetical));
    }

    #[test]
    fn config_size_defaults_to_33() {
        let yaml = "collections: []\n";
        let config: BakeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.size, 33);
    }
}
