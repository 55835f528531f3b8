//! Sampling plan computation.
//!
//! A plan fixes how many frames are pulled from a video, how far apart they
//! are, and how the tiles are laid out in the sprite sheet. It is pure
//! arithmetic over the probed duration and the [`SpriteConfig`].

use crate::config::{MAX_FRAMES, MIN_FRAMES, SECONDS_PER_FRAME, SpriteConfig};
use crate::error::{CoreError, CoreResult};

use serde::Serialize;

/// Frame sampling and tile layout for one sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingPlan {
    pub duration_secs: f64,
    /// Always within `MIN_FRAMES..=MAX_FRAMES`
    pub frame_count: u32,
    /// Seconds between sampled frames
    pub interval_secs: f64,
    pub columns: u32,
    pub rows: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

/// The subset of a plan a player needs to address tiles, using the field
/// names of the downstream database.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteMetadata {
    pub sprite_interval: f64,
    pub sprite_cols: u32,
    pub sprite_rows: u32,
    pub sprite_width: u32,
    pub sprite_height: u32,
}

/// Number of frames to sample: one per 30 seconds, clamped to [100, 300].
pub fn frame_count_for(duration_secs: f64) -> u32 {
    let target = (duration_secs / SECONDS_PER_FRAME).clamp(f64::from(MIN_FRAMES), f64::from(MAX_FRAMES));
    target.floor() as u32
}

/// Rows needed to hold `frame_count` tiles at `columns` per row.
pub fn rows_for(frame_count: u32, columns: u32) -> u32 {
    frame_count.div_ceil(columns)
}

impl SamplingPlan {
    /// Builds the plan for a video of the given duration.
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidDuration` - If the duration is not a finite value above zero
    /// * `CoreError::Config` - If the sprite config fails validation
    pub fn new(duration_secs: f64, config: &SpriteConfig) -> CoreResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(CoreError::InvalidDuration(duration_secs));
        }
        config.validate()?;

        let frame_count = frame_count_for(duration_secs);
        Ok(Self {
            duration_secs,
            frame_count,
            interval_secs: duration_secs / f64::from(frame_count),
            columns: config.columns,
            rows: rows_for(frame_count, config.columns),
            tile_width: config.tile_width,
            tile_height: config.tile_height,
        })
    }

    /// The ffmpeg `-vf` expression: sample, scale, then tile.
    pub fn filter_chain(&self) -> String {
        format!(
            "fps=1/{},scale={}:{},tile={}x{}",
            self.interval_secs, self.tile_width, self.tile_height, self.columns, self.rows
        )
    }

    /// Pixel size of the finished sprite sheet.
    pub fn sheet_dimensions(&self) -> (u32, u32) {
        (self.columns * self.tile_width, self.rows * self.tile_height)
    }

    pub fn metadata(&self) -> SpriteMetadata {
        SpriteMetadata {
            sprite_interval: self.interval_secs,
            sprite_cols: self.columns,
            sprite_rows: self.rows,
            sprite_width: self.tile_width,
            sprite_height: self.tile_height,
        }
    }
}
