//! Nightlight CLI: composite light fixtures and build inpainting masks.
//!
//! Usage:
//!   nightlight compose [OPTIONS] --at X,Y    Composite a fixture onto a background
//!   nightlight demo [--output DIR]           Generate sample inputs (and optionally compose)

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nightlight_compositor::Placement;

mod commands;
mod demo_assets;

#[derive(Parser)]
#[command(
    name = "nightlight",
    about = "Overlay light fixtures and generate inpainting masks",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite a fixture onto a background and write the mask
    Compose {
        /// Background image
        #[arg(short, long)]
        background: PathBuf,

        /// Fixture image (transparency is respected)
        #[arg(short = 'f', long)]
        overlay: PathBuf,

        /// Fixture center as X,Y; repeat for several fixtures
        #[arg(long = "at", value_name = "X,Y", required = true, allow_hyphen_values = true)]
        placements: Vec<Placement>,

        /// Fixture resize ratio
        #[arg(long, default_value = "0.2")]
        scale: f64,

        /// Mask padding as a fraction of fixture size
        #[arg(long, default_value = "0.30")]
        dilation: f64,

        /// Keep the background's original tone
        #[arg(long)]
        no_tone_filter: bool,

        /// Composite output path
        #[arg(long)]
        composite_out: Option<PathBuf>,

        /// Mask output path
        #[arg(long)]
        mask_out: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a sample house and fixture
    Demo {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Also composite the sample fixture at four stock positions
        #[arg(long)]
        compose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    nightlight_common::logging::init_logging(
        &nightlight_common::config::LoggingConfig::for_verbosity(cli.verbose),
    );

    match cli.command {
        Commands::Compose {
            background,
            overlay,
            placements,
            scale,
            dilation,
            no_tone_filter,
            composite_out,
            mask_out,
            json,
        } => commands::compose::run(commands::compose::ComposeArgs {
            background,
            overlay,
            placements,
            scale,
            dilation,
            tone_filter: !no_tone_filter,
            composite_out,
            mask_out,
            json,
        }),
        Commands::Demo { output, compose } => commands::demo::run(output, compose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_accepts_negative_centers() {
        let cli = Cli::try_parse_from([
            "nightlight", "compose", "-b", "house.png", "-f", "lamp.png", "--at", "-5,10", "--at",
            "400,-20",
        ])
        .unwrap();

        match cli.command {
            Commands::Compose { placements, .. } => {
                assert_eq!(
                    placements,
                    vec![Placement::new(-5, 10), Placement::new(400, -20)]
                );
            }
            Commands::Demo { .. } => panic!("expected compose"),
        }
    }

    #[test]
    fn test_compose_requires_a_placement() {
        assert!(Cli::try_parse_from(["nightlight", "compose", "-b", "a.png", "-f", "b.png"]).is_err());
    }
}
