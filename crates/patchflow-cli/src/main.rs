mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use patchflow_core::io::{load_image, save_color_image};
use patchflow_core::matcher::{match_frames_with_progress, MatchConfig};
use patchflow_core::visualize::field_to_color;

#[derive(Parser)]
#[command(
    name = "patchflow",
    about = "Dense randomized correspondence matching between two images"
)]
#[command(version)]
struct Cli {
    /// First (source) image
    pub image1: PathBuf,

    /// Second (target) image
    pub image2: PathBuf,

    /// Patch radius for the distance metric
    #[arg(long, default_value = "5")]
    patch_radius: usize,

    /// Bound on the random offsets drawn during seeding
    #[arg(long, default_value = "10")]
    max_offset: u32,

    /// Number of full propagation/search passes
    #[arg(long, default_value = "5")]
    passes: usize,

    /// Per-step decay of the random-search window radius
    #[arg(long, default_value = "0.5")]
    search_ratio: f32,

    /// Initial search window radius (defaults to the smaller image dimension)
    #[arg(long)]
    search_radius: Option<u32>,

    /// RNG seed; identical seeds reproduce identical fields
    #[arg(long, default_value = "0")]
    seed: u64,

    /// TOML file with the match configuration (replaces the flags above)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output image path (PNG or TIFF)
    #[arg(short, long, default_value = "flow.png")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = build_config(&cli)?;

    let frame1 = load_image(&cli.image1)
        .with_context(|| format!("Failed to load {}", cli.image1.display()))?;
    let frame2 = load_image(&cli.image2)
        .with_context(|| format!("Failed to load {}", cli.image2.display()))?;

    println!("Loaded {}x{} frames", frame1.width(), frame1.height());

    let search_radius = config
        .search_radius
        .map(|r| r as f32)
        .unwrap_or(frame1.height().min(frame1.width()) as f32);
    summary::print_run_summary(&config, search_radius);

    let pb = ProgressBar::new(config.passes as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Matching");

    let field = match_frames_with_progress(&frame1.data, &frame2.data, &config, |done| {
        pb.set_position(done as u64)
    })?;
    pb.finish_with_message("Matching complete");

    let color = field_to_color(&field);
    save_color_image(&color, &cli.output)?;
    println!("Saved to {}", cli.output.display());

    Ok(())
}

fn build_config(cli: &Cli) -> Result<MatchConfig> {
    if let Some(ref path) = cli.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&text).context("Invalid match configuration")?;
        info!(config = %path.display(), "configuration loaded from file");
        return Ok(config);
    }

    Ok(MatchConfig {
        patch_radius: cli.patch_radius,
        max_offset: cli.max_offset,
        passes: cli.passes,
        search_ratio: cli.search_ratio,
        search_radius: cli.search_radius,
        seed: cli.seed,
    })
}
