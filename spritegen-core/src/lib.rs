//! Core library for generating thumbnail sprite sheets from videos using
//! ffprobe and ffmpeg.
//!
//! For each video the duration is probed, a [`SamplingPlan`] is derived
//! (100 to 300 frames, one per 30 seconds of content), and ffmpeg samples,
//! scales and tiles the frames into a single JPEG.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use spritegen_core::config::BatchConfigBuilder;
//! use spritegen_core::external::{FfprobeCli, SidecarSpawner};
//! use spritegen_core::{ensure_directories, find_processable_files, process_videos};
//! use std::path::PathBuf;
//!
//! let config = BatchConfigBuilder::new()
//!     .input_dir(PathBuf::from("input"))
//!     .output_dir(PathBuf::from("output"))
//!     .build();
//! ensure_directories(&config.input_dir, &config.output_dir).unwrap();
//!
//! let files = find_processable_files(&config.input_dir).unwrap();
//! let report = process_videos(
//!     &FfprobeCli::new(),
//!     &SidecarSpawner::new(),
//!     &config,
//!     &files,
//!     |result| println!("{:?}", result.plan.metadata()),
//! )
//! .unwrap();
//! println!("{} generated, {} failed", report.generated.len(), report.failed.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{BatchConfig, SpriteConfig};
pub use discovery::{ensure_directories, find_processable_files, is_video_file, sprite_output_path};
pub use error::{CoreError, CoreResult};
pub use processing::{
    BatchReport, FileFailure, SamplingPlan, SpriteMetadata, SpriteResult, generate_sprite,
    process_videos,
};
pub use utils::{format_bytes, format_duration};
