// spritegen-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

use clap::{Args, Parser, Subcommand};
use spritegen_core::SpriteConfig;
use spritegen_core::config::{
    DEFAULT_COLUMNS, DEFAULT_JPEG_QUALITY, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    MAX_JPEG_QUALITY,
};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "spritegen: Video thumbnail sprite sheet generator",
    long_about = "Samples frames from videos with ffmpeg and tiles them into a single JPEG per video, \
                  printing the grid metadata a player needs to address each tile."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Also write a timestamped log file into this directory
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a sprite sheet for every video in the input directory
    Generate(GenerateArgs),
    /// Prints the sampling plan for a video or a duration without running ffmpeg
    Plan(PlanArgs),
}

impl Commands {
    /// Whether stdout is reserved for JSON records.
    pub fn json_output(&self) -> bool {
        match self {
            Commands::Generate(args) => args.json,
            Commands::Plan(args) => args.json,
        }
    }
}

/// Tile layout shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Number of tiles per row
    #[arg(long, value_name = "N", default_value_t = DEFAULT_COLUMNS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: u32,

    /// Width of each tile in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TILE_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of each tile in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TILE_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}

impl LayoutArgs {
    pub fn sprite_config(&self, quality: u8) -> SpriteConfig {
        SpriteConfig {
            columns: self.columns,
            tile_width: self.width,
            tile_height: self.height,
            quality,
        }
    }
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Directory containing videos, or a single video file (created if missing)
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH", default_value = DEFAULT_INPUT_DIR)]
    pub input_path: PathBuf,

    /// Directory where sprite sheets will be saved (created if missing)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// JPEG quality passed to ffmpeg as -q:v (1-31, lower is better)
    #[arg(long, value_name = "Q", default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=MAX_JPEG_QUALITY as i64))]
    pub quality: u8,

    /// Keep whatever ffmpeg wrote when it fails instead of deleting it
    #[arg(long)]
    pub keep_partial: bool,

    /// Print sprite metadata as one JSON object per line on stdout
    #[arg(long)]
    pub json: bool,

    /// Optional: Path to the ffmpeg executable
    #[arg(long, value_name = "PATH")]
    pub ffmpeg: Option<PathBuf>,

    /// Optional: Path to the ffprobe executable
    #[arg(long, value_name = "PATH")]
    pub ffprobe: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Video file to probe for its duration
    #[arg(value_name = "FILE", required_unless_present = "duration")]
    pub file: Option<PathBuf>,

    /// Use this duration in seconds instead of probing a file
    #[arg(long, value_name = "SECONDS", conflicts_with = "file")]
    pub duration: Option<f64>,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Print the plan as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Optional: Path to the ffprobe executable
    #[arg(long, value_name = "PATH")]
    pub ffprobe: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults_match_core_defaults() {
        let cli = Cli::parse_from(["spritegen", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.input_path, PathBuf::from("input"));
        assert_eq!(args.output_dir, PathBuf::from("output"));
        assert_eq!(args.layout.sprite_config(args.quality), SpriteConfig::default());
        assert!(!args.keep_partial);
        assert!(!args.json);
    }

    #[test]
    fn plan_accepts_duration_or_file() {
        let cli = Cli::parse_from(["spritegen", "plan", "--duration", "6000", "--columns", "8"]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        assert_eq!(args.duration, Some(6000.0));
        assert_eq!(args.layout.columns, 8);

        assert!(Cli::try_parse_from(["spritegen", "plan"]).is_err());
        assert!(Cli::try_parse_from(["spritegen", "plan", "a.mp4", "--duration", "5"]).is_err());
    }

    #[test]
    fn zero_columns_rejected_by_parser() {
        assert!(Cli::try_parse_from(["spritegen", "generate", "--columns", "0"]).is_err());
        assert!(Cli::try_parse_from(["spritegen", "generate", "--quality", "32"]).is_err());
    }
}
