//! Implementation of the 'generate' subcommand.
//!
//! Resolves the input (a directory or a single video), makes sure the
//! directories exist, then hands the file list to the core batch driver.

use crate::cli::GenerateArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output;
use crate::terminal;

use spritegen_core::config::BatchConfigBuilder;
use spritegen_core::external::{FfprobeCli, SidecarSpawner, check_dependencies};
use spritegen_core::{BatchReport, CoreError, ensure_directories, find_processable_files, is_video_file};

use log::debug;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Discovers videos from the input path (file or directory).
///
/// A missing input path is created as a directory. Returns
/// `(files, effective_input_dir)`.
pub fn discover_sprite_inputs(args: &GenerateArgs) -> CliResult<(Vec<PathBuf>, PathBuf)> {
    let input_path = &args.input_path;

    if input_path.is_file() {
        if !is_video_file(input_path) {
            return Err(CoreError::OperationFailed(format!(
                "Input file '{}' is not a recognized video (.mp4, .mov, .avi, .mkv, .webm)",
                input_path.display()
            )));
        }
        let parent_dir = input_path
            .parent()
            .map(std::path::Path::to_path_buf)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&args.output_dir).cli_with_context(|| {
            format!("Failed to create output directory '{}'", args.output_dir.display())
        })?;
        return Ok((vec![input_path.clone()], parent_dir));
    }

    // A missing path that looks like a video is a typo, not a folder to create.
    if !input_path.exists() && is_video_file(input_path) {
        return Err(CoreError::PathError(format!(
            "Input file '{}' does not exist",
            input_path.display()
        )));
    }

    ensure_directories(input_path, &args.output_dir)?;
    match find_processable_files(input_path) {
        Ok(files) => Ok((files, input_path.clone())),
        Err(CoreError::NoFilesFound) => Ok((Vec::new(), input_path.clone())),
        Err(e) => Err(e),
    }
}

/// Runs a batch and returns the per-file report.
///
/// The caller decides the exit status from [`BatchReport::has_failures`].
pub fn run_generate(args: GenerateArgs) -> CliResult<BatchReport> {
    let start = Instant::now();
    let (files, input_dir) = discover_sprite_inputs(&args)?;

    let config = BatchConfigBuilder::new()
        .input_dir(input_dir)
        .output_dir(args.output_dir.clone())
        .sprite(args.layout.sprite_config(args.quality))
        .keep_partial_output(args.keep_partial)
        .build();
    config.validate()?;
    debug!("Batch config: {config:?}");

    terminal::print_section("Sprite generation");
    terminal::print_status("Input", &config.input_dir.display().to_string(), false);
    terminal::print_status("Output", &config.output_dir.display().to_string(), false);
    terminal::print_status(
        "Grid",
        &format!(
            "{} columns of {}x{}",
            config.sprite.columns, config.sprite.tile_width, config.sprite.tile_height
        ),
        false,
    );

    if files.is_empty() {
        terminal::print_warning(&format!(
            "No videos found! Please put your videos in the '{}' folder.",
            config.input_dir.display()
        ));
        return Ok(BatchReport::default());
    }
    terminal::print_status("Videos", &files.len().to_string(), false);

    let prober = args
        .ffprobe
        .clone()
        .map(|path| FfprobeCli::with_binary(path))
        .unwrap_or_default();
    let spawner = args
        .ffmpeg
        .clone()
        .map(|path| SidecarSpawner::with_binary(path))
        .unwrap_or_default();
    check_dependencies(&prober, &spawner)?;

    let json = args.json;
    let report = spritegen_core::process_videos(&prober, &spawner, &config, &files, |result| {
        output::report_sprite(result, json);
    })?;

    output::print_summary(&report, start.elapsed());
    Ok(report)
}
