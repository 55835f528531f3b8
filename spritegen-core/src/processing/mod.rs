//! Sprite sheet processing: sampling plans, single-file generation and the
//! batch driver.

pub mod batch;
pub mod plan;
pub mod sprite;

pub use batch::{BatchReport, FileFailure, process_videos};
pub use plan::{SamplingPlan, SpriteMetadata};
pub use sprite::{SpriteResult, generate_sprite};
