//! lutbake - bake .cube LUT collections into generated Rust tables

use anyhow::{Context, Result};
use clap::Parser;
use lutbake_gen::BakeConfig;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lutbake")]
#[command(author, version, about = "Bake .cube LUT collections into generated Rust tables")]
#[command(long_about = "
One-shot build-time batch tool: parses every .cube LUT named by the
collection config, resamples each grid to the shared target resolution,
and emits the results as generated Rust source (static arrays plus a
lookup registry) for the real-time grading pipeline.

Examples:
  lutbake -c luts.yaml -o src/generated
  lutbake -c luts.yaml -o src/generated --size 17 -v
")]
struct Cli {
    /// Collection config file (YAML)
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory for the generated modules
    #[arg(short, long)]
    out_dir: PathBuf,

    /// Target lattice resolution (overrides the config value)
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" })),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = BakeConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;
    let size = cli.size.unwrap_or(config.size);

    info!(collections = config.collections.len(), size, "starting bake");
    if cli.verbose {
        println!(
            "Baking {} collections at size {}",
            config.collections.len(),
            size
        );
    }

    let baked = lutbake_gen::bake(&config.collections, size)?;

    for collection in &baked {
        debug!(collection = %collection.name, luts = collection.luts.len(), "baked");
        if cli.verbose {
            for lut in &collection.luts {
                println!(
                    "  [{}] {} ({} floats)",
                    collection.name,
                    lut.name,
                    3 * lut.lut.data.len()
                );
            }
        }
    }

    lutbake_gen::write_artifact(&cli.out_dir, &baked, size)
        .with_context(|| format!("Failed to write artifact: {}", cli.out_dir.display()))?;

    let total: usize = baked.iter().map(|c| c.luts.len()).sum();
    println!(
        "Done. {} LUTs across {} collections -> {}",
        total,
        baked.len(),
        cli.out_dir.display()
    );

    Ok(())
}
