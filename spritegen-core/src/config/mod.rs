//! Configuration structures and constants for the spritegen-core library.
//!
//! This module holds the per-sprite layout settings (`SpriteConfig`) and the
//! batch-level settings (`BatchConfig`) that tie an input and an output
//! directory together.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::BatchConfigBuilder;

// Default constants

/// Default number of tiles per sprite sheet row.
pub const DEFAULT_COLUMNS: u32 = 10;

/// Default width in pixels of each sampled frame.
pub const DEFAULT_TILE_WIDTH: u32 = 160;

/// Default height in pixels of each sampled frame.
pub const DEFAULT_TILE_HEIGHT: u32 = 90;

/// Default ffmpeg `-q:v` value for the JPEG encoder.
/// Range: 1-31, lower is better quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 2;

/// Highest `-q:v` value the JPEG encoder accepts.
pub const MAX_JPEG_QUALITY: u8 = 31;

/// Target sampling density: one frame per this many seconds of content.
pub const SECONDS_PER_FRAME: f64 = 30.0;

/// Lower bound on sampled frames, keeps short videos smooth to scrub.
pub const MIN_FRAMES: u32 = 100;

/// Upper bound on sampled frames, keeps the output image size bounded.
pub const MAX_FRAMES: u32 = 300;

/// Suffix appended to the input stem to name the sprite sheet.
pub const SPRITE_SUFFIX: &str = "_sprite.jpg";

/// File extensions (lowercase, without the dot) recognized as video input.
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// Layout and encoding settings for a single sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteConfig {
    /// Number of tiles per row
    pub columns: u32,

    /// Width of each tile in pixels
    pub tile_width: u32,

    /// Height of each tile in pixels
    pub tile_height: u32,

    /// ffmpeg `-q:v` value for the JPEG output
    pub quality: u8,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl SpriteConfig {
    /// Checks that every value can produce a valid ffmpeg filter chain.
    pub fn validate(&self) -> CoreResult<()> {
        if self.columns == 0 {
            return Err(CoreError::Config("columns must be at least 1".to_string()));
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(CoreError::Config(format!(
                "tile dimensions must be non-zero, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if !(1..=MAX_JPEG_QUALITY).contains(&self.quality) {
            return Err(CoreError::Config(format!(
                "quality must be between 1 and {MAX_JPEG_QUALITY}, got {}",
                self.quality
            )));
        }
        Ok(())
    }
}

/// Main configuration structure for a batch run.
///
/// Created by the consumer of the library (e.g., spritegen-cli), usually via
/// [`BatchConfigBuilder`], and passed to
/// [`process_videos`](crate::processing::process_videos).
///
/// # Examples
///
/// ```rust
/// use spritegen_core::config::BatchConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = BatchConfigBuilder::new()
///     .input_dir(PathBuf::from("videos"))
///     .output_dir(PathBuf::from("sprites"))
///     .columns(8)
///     .build();
///
/// assert_eq!(config.sprite.columns, 8);
/// assert!(config.remove_partial_output);
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for input videos
    pub input_dir: PathBuf,

    /// Directory where sprite sheets are written
    pub output_dir: PathBuf,

    /// Layout applied to every sprite sheet in the batch
    pub sprite: SpriteConfig,

    /// Delete whatever ffmpeg left at the output path when it fails
    pub remove_partial_output: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            sprite: SpriteConfig::default(),
            remove_partial_output: true,
        }
    }
}

impl BatchConfig {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("input directory must not be empty".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("output directory must not be empty".to_string()));
        }
        self.sprite.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sprite_config_is_valid() {
        let config = SpriteConfig::default();
        assert_eq!(config.columns, 10);
        assert_eq!((config.tile_width, config.tile_height), (160, 90));
        assert_eq!(config.quality, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_columns_rejected() {
        let config = SpriteConfig {
            columns: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_dimension_rejected() {
        let config = SpriteConfig {
            tile_height: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn quality_out_of_range_rejected() {
        for quality in [0, 32] {
            let config = SpriteConfig {
                quality,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "quality {quality} accepted");
        }
    }

    #[test]
    fn empty_output_dir_rejected() {
        let config = BatchConfig::new(PathBuf::from("in"), PathBuf::new());
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
