// ============================================================================
// spritegen-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and ffmpeg
//
// This module encapsulates interactions with the external command-line tools.
// Each tool sits behind a small trait so the sampling and batch logic can be
// exercised with mocks instead of real binaries.
//
// KEY COMPONENTS:
// - DurationProber / FfprobeCli: duration lookup via ffprobe
// - FfmpegSpawner / SidecarSpawner: ffmpeg process execution via ffmpeg-sidecar
// - Dependency checking functions

use crate::error::{CoreError, CoreResult};

use std::ffi::OsStr;
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the sprite sheet ffmpeg command builder and runner
pub mod ffmpeg;

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for probing durations with ffprobe
pub mod ffprobe_executor;

#[cfg(all(unix, test))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::{DurationProber, FfprobeCli, parse_duration_output};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and only cares whether it could start.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - If the command is not found
/// * `CoreError::CommandStart` - If the command exists but fails to start
pub fn check_dependency(cmd_name: &OsStr) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    let display_name = cmd_name.to_string_lossy();
    match result {
        Ok(_) => {
            log::debug!("Found dependency: {display_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{display_name}' not found.");
            Err(CoreError::DependencyNotFound(display_name.into_owned()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{display_name}': {e}");
            Err(CoreError::CommandStart(display_name.into_owned(), e))
        }
    }
}

/// Checks both binaries the sprite pipeline shells out to.
pub fn check_dependencies(prober: &FfprobeCli, spawner: &SidecarSpawner) -> CoreResult<()> {
    check_dependency(spawner.binary().as_os_str())?;
    check_dependency(prober.binary().as_os_str())
}
