use std::path::PathBuf;
use std::thread::available_parallelism;

use anyhow::{Context, Result};
use clap::Parser;
use lighthouse_globe::{run, GlobeConfig, TextureMap};
use log::info;
use rayon::ThreadPoolBuilder;

#[derive(Parser, Debug)]
#[command(name = "lighthouse-globe")]
#[command(about = "Renders a rotating globe onto a 14x28 pixel display")]
struct Args {
    /// Globe settings as JSON, defaults to the embedded configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Equirectangular texture in plain PNM (P3), defaults to the embedded earth map
    #[arg(short, long)]
    texture: Option<PathBuf>,

    #[arg(long)]
    frame_rate: Option<u32>,

    /// Degrees of longitude per second
    #[arg(long, allow_hyphen_values = true)]
    rotation_rate: Option<f64>,

    #[arg(long)]
    max_interpolation: Option<usize>,

    /// Print pixels as █ blocks instead of ASCII
    #[arg(long)]
    full_color: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let thread_count = args.threads
        .or_else(|| available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(4);
    ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build_global()
        .context("Failed to configure rayon thread pool")?;

    let mut config = match &args.config {
        Some(path) => GlobeConfig::load(path)
            .with_context(|| format!("Failed to read config file at '{}'", path.display()))?,
        None => GlobeConfig::embedded().context("Failed to parse embedded config")?,
    };
    if let Some(frame_rate) = args.frame_rate {
        config.frame_rate = frame_rate;
    }
    if let Some(rotation_rate) = args.rotation_rate {
        config.rotation_rate = rotation_rate;
    }
    if let Some(radius) = args.max_interpolation {
        config.max_interpolation_radius = radius;
    }

    let texture = match &args.texture {
        Some(path) => TextureMap::load(path)
            .with_context(|| format!("Failed to load texture at '{}'", path.display()))?,
        None => TextureMap::default_earth().context("Failed to load embedded earth map")?,
    };

    if args.full_color {
        info!("outputting with █ characters");
    } else {
        info!("outputting with ASCII characters");
    }
    info!("rayon threads: {}", thread_count);

    run(&config, texture, args.full_color)
}
