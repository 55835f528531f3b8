//! Implementation of the 'plan' subcommand.
//!
//! Shows what `generate` would do for one video without running ffmpeg.

use crate::cli::PlanArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output;
use crate::terminal;

use spritegen_core::config::DEFAULT_JPEG_QUALITY;
use spritegen_core::external::{DurationProber, FfprobeCli};
use spritegen_core::{SamplingPlan, format_duration};

/// Resolves the duration from `--duration` or by probing the file.
fn resolve_duration(args: &PlanArgs) -> CliResult<f64> {
    if let Some(duration) = args.duration {
        return Ok(duration);
    }

    let file = args
        .file
        .as_deref()
        .cli_context("Either a FILE or --duration is required")?;
    let prober = args
        .ffprobe
        .clone()
        .map(|path| FfprobeCli::with_binary(path))
        .unwrap_or_default();
    prober
        .probe_duration(file)
        .cli_with_context(|| format!("Could not determine duration of '{}'", file.display()))
}

pub fn run_plan(args: PlanArgs) -> CliResult<SamplingPlan> {
    let duration = resolve_duration(&args)?;
    let plan = SamplingPlan::new(duration, &args.layout.sprite_config(DEFAULT_JPEG_QUALITY))?;

    if args.json {
        let json = serde_json::to_string_pretty(&plan).map_err(output::json_error)?;
        println!("{json}");
        return Ok(plan);
    }

    let (sheet_width, sheet_height) = plan.sheet_dimensions();
    terminal::print_section("Sampling plan");
    if let Some(file) = &args.file {
        terminal::print_status("File", &file.display().to_string(), false);
    }
    terminal::print_status(
        "Duration",
        &format!("{:.2}s ({})", plan.duration_secs, format_duration(plan.duration_secs)),
        false,
    );
    terminal::print_status("Frames", &plan.frame_count.to_string(), true);
    terminal::print_status("Interval", &format!("{:.4}s", plan.interval_secs), false);
    terminal::print_status("Grid", &format!("{}x{}", plan.columns, plan.rows), false);
    terminal::print_status(
        "Tile size",
        &format!("{}x{}", plan.tile_width, plan.tile_height),
        false,
    );
    terminal::print_status("Sheet size", &format!("{sheet_width}x{sheet_height}"), false);
    terminal::print_status("Filter", &plan.filter_chain(), false);

    output::print_metadata_block(&plan.metadata());
    Ok(plan)
}
