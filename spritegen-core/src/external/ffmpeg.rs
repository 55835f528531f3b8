//! FFmpeg command building and execution for sprite sheets.
//!
//! One ffmpeg run per video: sample frames at the plan's rate, scale each to
//! the tile size, tile them into a single image and write exactly one JPEG.

use crate::error::{CoreResult, command_failed_error};
use crate::external::{FfmpegProcess, FfmpegSpawner};
use crate::processing::plan::SamplingPlan;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use log::debug;

use std::collections::VecDeque;
use std::path::Path;

/// Builds the ffmpeg invocation for one sprite sheet.
///
/// Equivalent to
/// `ffmpeg -i <input> -vf <filter chain> -frames:v 1 -q:v <quality> -y <output>`.
pub fn build_sprite_command(
    mut cmd: FfmpegCommand,
    input_path: &Path,
    output_path: &Path,
    plan: &SamplingPlan,
    quality: u8,
) -> FfmpegCommand {
    cmd.input(input_path.to_string_lossy().as_ref());
    cmd.args(["-vf", &plan.filter_chain()]);
    cmd.args(["-frames:v", "1"]);
    cmd.args(["-q:v", &quality.to_string()]);
    cmd.arg("-y");
    cmd.output(output_path.to_string_lossy().as_ref());
    cmd
}

/// Most recent ffmpeg stderr lines kept for a failure report.
const MAX_DIAGNOSTIC_LINES: usize = 50;

/// Runs the sprite sheet command and waits for it to finish.
///
/// Everything ffmpeg writes to stderr is kept (the last
/// [`MAX_DIAGNOSTIC_LINES`] lines) and returned as the diagnostic text of
/// `CoreError::CommandFailed` on a non-zero exit.
pub fn run_sprite_encode<S: FfmpegSpawner>(
    spawner: &S,
    input_path: &Path,
    output_path: &Path,
    plan: &SamplingPlan,
    quality: u8,
) -> CoreResult<()> {
    let cmd = build_sprite_command(spawner.command(), input_path, output_path, plan, quality);
    debug!("Running sprite command: {cmd:?}");

    let mut process = spawner.spawn(cmd)?;
    let mut diagnostics: VecDeque<String> = VecDeque::with_capacity(MAX_DIAGNOSTIC_LINES);
    let mut keep = |line: String| {
        if diagnostics.len() == MAX_DIAGNOSTIC_LINES {
            diagnostics.pop_front();
        }
        diagnostics.push_back(line);
    };

    process.handle_events(|event| {
        match event {
            FfmpegEvent::Log(level, line) => {
                debug!("ffmpeg [{level:?}]: {line}");
                keep(line);
            }
            FfmpegEvent::Error(line) => {
                debug!("ffmpeg error event: {line}");
                keep(line);
            }
            FfmpegEvent::Progress(progress) => {
                debug!(
                    "ffmpeg progress: frame={} time={}",
                    progress.frame, progress.time
                );
            }
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if !status.success() {
        let stderr = Vec::from(diagnostics).join("\n");
        debug!(
            "ffmpeg exited with {} for {}",
            status,
            input_path.display()
        );
        return Err(command_failed_error("ffmpeg", status, stderr));
    }

    Ok(())
}
