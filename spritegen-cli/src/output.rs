//! Rendering of sprite results, metadata blocks and the batch summary.

use crate::error::CliResult;
use crate::terminal;

use log::info;
use spritegen_core::{BatchReport, CoreError, SpriteMetadata, SpriteResult, format_bytes};

use std::time::Duration;

/// Lines of the metadata block meant for copying into the sprite database.
pub fn metadata_block(meta: &SpriteMetadata) -> Vec<String> {
    vec![
        "--- Metadata for Database ---".to_string(),
        format!("spriteInterval: {:.5}", meta.sprite_interval),
        format!("spriteCols: {}", meta.sprite_cols),
        format!("spriteRows: {}", meta.sprite_rows),
        format!("spriteWidth: {}", meta.sprite_width),
        format!("spriteHeight: {}", meta.sprite_height),
        "-----------------------------".to_string(),
    ]
}

pub fn print_metadata_block(meta: &SpriteMetadata) {
    info!("");
    for line in metadata_block(meta) {
        info!("{line}");
    }
    info!("");
}

/// One JSON record per sprite: paths plus the database fields.
pub fn sprite_json(result: &SpriteResult) -> CliResult<String> {
    let mut record = serde_json::to_value(result.plan.metadata()).map_err(json_error)?;
    if let Some(fields) = record.as_object_mut() {
        fields.insert(
            "input".to_string(),
            result.input_path.to_string_lossy().into_owned().into(),
        );
        fields.insert(
            "output".to_string(),
            result.output_path.to_string_lossy().into_owned().into(),
        );
    }
    serde_json::to_string(&record).map_err(json_error)
}

pub fn json_error(err: serde_json::Error) -> CoreError {
    CoreError::OperationFailed(format!("Failed to serialize JSON: {err}"))
}

/// Called by the batch driver after each generated sprite sheet.
pub fn report_sprite(result: &SpriteResult, json: bool) {
    let size = result
        .output_size
        .map(format_bytes)
        .unwrap_or_else(|| "unknown size".to_string());
    terminal::print_success(&format!(
        "Generated: {} ({}, {:.1}s)",
        result.output_path.display(),
        size,
        result.elapsed.as_secs_f64()
    ));

    if json {
        match sprite_json(result) {
            Ok(line) => println!("{line}"),
            Err(e) => log::error!("{e}"),
        }
    } else {
        print_metadata_block(&result.plan.metadata());
    }
}

pub fn print_summary(report: &BatchReport, elapsed: Duration) {
    terminal::print_section("SUMMARY");
    terminal::print_status("Videos", &report.total().to_string(), false);
    terminal::print_status(
        "Generated",
        &report.generated.len().to_string(),
        !report.generated.is_empty(),
    );
    terminal::print_status("Failed", &report.failed.len().to_string(), false);
    terminal::print_status("Total time", &format!("{:.1}s", elapsed.as_secs_f64()), false);

    for failure in &report.failed {
        let name = failure
            .input_path
            .file_name()
            .map_or_else(|| failure.input_path.display().to_string(), |n| n.to_string_lossy().into_owned());
        terminal::print_error(
            &format!("Error generating sprite for {name}"),
            &failure.error.to_string(),
        );
    }
}
