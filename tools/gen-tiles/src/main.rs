//! gen-tiles - ground-tile asset pipeline tool
//!
//! Prepares the 2D ground-tile asset set:
//! - `textures` synthesizes the six ground materials (grass, dirt, sand,
//!   stone, water, forest) as PNG tiles
//! - `strip` converts near-white backgrounds of hand-authored sprites to
//!   transparency, overwriting each file in place
//! - `all` runs both over the default asset layout
//!
//! Each material `{name}` is saved as `ground_{name}.png` (water as
//! `water_tile.png`) in the output directory, which is created if absent.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::fs;
use std::path::{Path, PathBuf};
use tile_gen::chroma::{self, StripOutcome, DEFAULT_THRESHOLD};
use tile_gen::texture::{write_png, Material, DEFAULT_TILE_SIZE};

/// Sprites that ship with a white canvas and need transparency
const ASSETS_TO_STRIP: &[&str] = &["tree_green.png", "rock_large.png"];

#[derive(Parser)]
#[command(name = "gen-tiles")]
#[command(about = "Ground-tile texture generation and background stripping")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all six ground material tiles
    Textures {
        /// Output directory for generated tiles
        #[arg(short, long, default_value = "assets/inner-world")]
        output: PathBuf,

        /// Tile edge length in pixels
        #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
        size: u32,

        /// RNG seed for reproducible tiles (entropy-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Strip near-white backgrounds from image files, in place
    Strip {
        /// Image files to process
        paths: Vec<PathBuf>,

        /// Channel threshold above which a pixel counts as near-white
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,
    },

    /// Generate textures and strip the default sprite set
    All {
        /// Asset directory holding both tiles and sprites
        #[arg(short, long, default_value = "assets/inner-world")]
        output: PathBuf,

        /// Tile edge length in pixels
        #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
        size: u32,

        /// RNG seed for reproducible tiles (entropy-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Textures { output, size, seed } => {
            generate_textures(&output, size, seed)?;
        }

        Commands::Strip { paths, threshold } => {
            strip_backgrounds(&paths, threshold)?;
        }

        Commands::All { output, size, seed } => {
            generate_textures(&output, size, seed)?;
            let sprites: Vec<PathBuf> =
                ASSETS_TO_STRIP.iter().map(|name| output.join(name)).collect();
            strip_backgrounds(&sprites, DEFAULT_THRESHOLD)?;
        }
    }

    Ok(())
}

/// Generate every material tile into `output`, overwriting existing files
fn generate_textures(output: &Path, size: u32, seed: Option<u64>) -> Result<()> {
    fs::create_dir_all(output)?;

    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    for material in Material::ALL {
        let path = output.join(material.file_name());
        tracing::info!(
            "Generating {} tile ({}x{}) -> {}",
            material.name(),
            size,
            size,
            path.display()
        );
        let tex = material.generate(size, size, &mut rng);
        write_png(&tex, &path)?;
    }

    tracing::info!("All {} tiles generated", Material::ALL.len());
    Ok(())
}

/// Strip the given sprites, logging the per-asset report
fn strip_backgrounds(paths: &[PathBuf], threshold: u8) -> Result<()> {
    let report = chroma::strip_batch(paths, threshold)?;

    let stripped = report
        .iter()
        .filter(|r| r.outcome == StripOutcome::Stripped)
        .count();
    let skipped = report.len() - stripped;
    tracing::info!("Stripped {stripped} sprite(s), skipped {skipped}");

    Ok(())
}
