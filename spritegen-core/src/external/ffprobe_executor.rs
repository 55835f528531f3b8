//! FFprobe integration for duration probing.
//!
//! Only the container duration is needed, so ffprobe is asked to print
//! `format.duration` as a bare value and nothing else.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can report the total duration of a media file.
pub trait DurationProber {
    /// Returns the duration of `input_path` in seconds.
    fn probe_duration(&self, input_path: &Path) -> CoreResult<f64>;
}

/// Probes durations by running the `ffprobe` binary.
#[derive(Debug, Clone)]
pub struct FfprobeCli {
    binary: PathBuf,
}

impl Default for FfprobeCli {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("ffprobe"),
        }
    }
}

impl FfprobeCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a specific ffprobe executable instead of the one on `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self, input_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ]);
        cmd.arg(input_path);
        cmd
    }
}

impl DurationProber for FfprobeCli {
    fn probe_duration(&self, input_path: &Path) -> CoreResult<f64> {
        log::debug!("Running ffprobe for duration on: {}", input_path.display());

        let output = self
            .command(input_path)
            .output()
            .map_err(|e| command_start_error("ffprobe", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("ffprobe failed for {}: {}", input_path.display(), stderr);
            return Err(command_failed_error("ffprobe", output.status, stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_duration_output(&stdout)
    }
}

/// Parses the bare `format.duration` value printed by ffprobe.
pub fn parse_duration_output(stdout: &str) -> CoreResult<f64> {
    let trimmed = stdout.trim();
    let duration = trimmed.parse::<f64>().map_err(|_| {
        CoreError::FfprobeParse(format!("expected a duration in seconds, got {trimmed:?}"))
    })?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(CoreError::FfprobeParse(format!(
            "duration out of range: {duration}"
        )));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_seconds() {
        assert_eq!(parse_duration_output("125.458000\n").unwrap(), 125.458);
        assert_eq!(parse_duration_output("  42 ").unwrap(), 42.0);
    }

    #[test]
    fn rejects_non_numeric_output() {
        for bad in ["", "N/A", "duration=12.0", "\n"] {
            assert!(
                matches!(parse_duration_output(bad), Err(CoreError::FfprobeParse(_))),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        for bad in ["-1.0", "inf", "NaN"] {
            assert!(parse_duration_output(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn command_requests_only_duration() {
        let prober = FfprobeCli::with_binary("/opt/ffmpeg/bin/ffprobe");
        let cmd = prober.command(Path::new("input/clip.mp4"));
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(cmd.get_program(), "/opt/ffmpeg/bin/ffprobe");
        assert_eq!(
            args,
            [
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
                "input/clip.mp4",
            ]
        );
    }

    #[test]
    fn missing_binary_reports_start_error() {
        let prober = FfprobeCli::with_binary("spritegen-test-no-such-ffprobe");
        let err = prober.probe_duration(Path::new("clip.mp4")).unwrap_err();
        assert!(matches!(err, CoreError::CommandStart(..)));
    }
}
