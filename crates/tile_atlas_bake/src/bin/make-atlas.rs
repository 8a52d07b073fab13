use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tile_atlas::atlas::AtlasConfig;
use tile_atlas::catalog::Catalog;
use tile_atlas_bake::{bake, init_tracing, BakeOptions, DEFAULT_OUT_DIR};
use tracing::info;

/// Bakes the standard material catalog into a PNG atlas and a CSV legend.
#[derive(Parser, Debug)]
#[command(name = "make-atlas", version, about)]
struct Args {
    /// Directory the atlas and legend are written to.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Edge length of one tile in pixels.
    #[arg(long, default_value_t = 32)]
    tile_size: u32,

    /// Number of tiles along each atlas edge.
    #[arg(long, default_value_t = 8)]
    grid: u32,

    /// Seed for randomized details. Derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace). RUST_LOG overrides it.
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn bake_options(&self, seed: u64) -> BakeOptions {
        BakeOptions::new(&self.out_dir)
            .with_config(AtlasConfig::new(self.tile_size, self.grid))
            .with_seed(seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("Using seed {} (pass --seed {} to reproduce).", seed, seed);

    let options = args.bake_options(seed);

    let paths = bake(&Catalog::standard(), &options)
        .with_context(|| format!("baking atlas into {}", args.out_dir.display()))?;

    println!("{}", paths.png.display());
    println!("{}", paths.legend.display());
    Ok(())
}
