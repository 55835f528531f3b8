//! Single-file sprite sheet generation.
//!
//! Probe, plan, run ffmpeg. A probe failure stops before ffmpeg is started,
//! so nothing is written for that file.

use crate::config::SpriteConfig;
use crate::error::CoreResult;
use crate::external::ffmpeg::run_sprite_encode;
use crate::external::{DurationProber, FfmpegSpawner};
use crate::processing::plan::SamplingPlan;
use crate::utils::format_duration;

use log::{info, warn};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a successful sprite sheet run.
#[derive(Debug, Clone)]
pub struct SpriteResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub plan: SamplingPlan,
    /// Size of the written image, if it could be read back
    pub output_size: Option<u64>,
    pub elapsed: Duration,
}

/// Generates one sprite sheet for `input_path` at `output_path`.
///
/// Any existing file at `output_path` is overwritten. When ffmpeg fails and
/// `remove_partial_output` is set, whatever it left at `output_path` is
/// deleted before the error is returned.
pub fn generate_sprite<P, S>(
    prober: &P,
    spawner: &S,
    input_path: &Path,
    output_path: &Path,
    config: &SpriteConfig,
    remove_partial_output: bool,
) -> CoreResult<SpriteResult>
where
    P: DurationProber,
    S: FfmpegSpawner,
{
    let start = Instant::now();
    info!("Processing '{}'...", input_path.display());

    let duration = prober.probe_duration(input_path)?;
    let plan = SamplingPlan::new(duration, config)?;

    info!("Duration: {:.2}s ({})", duration, format_duration(duration));
    info!("Frames to extract: {}", plan.frame_count);
    info!("Interval: {:.4}s", plan.interval_secs);
    info!("Grid: {}x{}", plan.columns, plan.rows);

    if let Err(e) = run_sprite_encode(spawner, input_path, output_path, &plan, config.quality) {
        if remove_partial_output {
            discard_partial_output(output_path);
        }
        return Err(e);
    }

    let output_size = fs::metadata(output_path).map(|m| m.len()).ok();
    info!("Generated: {}", output_path.display());

    Ok(SpriteResult {
        input_path: input_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        plan,
        output_size,
        elapsed: start.elapsed(),
    })
}

fn discard_partial_output(output_path: &Path) {
    if !output_path.exists() {
        return;
    }
    match fs::remove_file(output_path) {
        Ok(()) => warn!("Removed partial output {}", output_path.display()),
        Err(e) => warn!(
            "Could not remove partial output {}: {}",
            output_path.display(),
            e
        ),
    }
}
