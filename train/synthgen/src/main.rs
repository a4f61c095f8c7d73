use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::{
    config::{DEFAULT_NUM_SAMPLES, GenConfig},
    generator::DatasetBuilder,
};

mod config;
mod fonts;
mod generator;
mod io;
mod preview;
mod record;

/// Generate a detection dataset of non-overlapping circles and rectangles.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Side length of the square images, in pixels.
    side: u32,
    /// Maximum number of objects per image (at least 2).
    max_objects: u32,
    /// Number of images to generate.
    #[arg(long, default_value_t = DEFAULT_NUM_SAMPLES)]
    num_samples: usize,
    /// Output directory; receives images/ and dataset.json.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
    /// Run seed. A random one is drawn and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Worker threads (defaults to one per core).
    #[arg(long)]
    threads: Option<usize>,
    /// Also write box overlays for the first N images into preview/.
    #[arg(long, default_value_t = 0, value_name = "N")]
    preview: usize,
    /// Directory searched for a .ttf/.otf font for preview labels.
    #[arg(long, default_value = "assets/fonts")]
    font_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to start worker threads")?;
    }

    let cfg = GenConfig {
        out_dir: args.out_dir,
        side: args.side,
        max_objects: args.max_objects,
        num_samples: args.num_samples,
        seed: args.seed.unwrap_or_else(rand::random),
        preview: args.preview,
        font_dir: args.font_dir,
    };

    DatasetBuilder::new(&cfg)?.run()?;
    Ok(())
}
