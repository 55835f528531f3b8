// ============================================================================
// spritegen-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Logging via fern
//
// All output, including the styled terminal lines, goes through the `log`
// facade. The console gets bare messages (warnings and errors on stderr with
// a level prefix); the optional log file gets timestamped lines with ANSI
// codes stripped.
//
// Verbosity:
// - default: info
// - --verbose: debug

use crate::config::LOG_FILE_PREFIX;
use crate::error::{CliErrorContext, CliResult};

use log::{Level, LevelFilter};
use spritegen_core::CoreError;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Name of the log file for a run started at `timestamp`.
pub fn log_file_name(timestamp: &str) -> String {
    format!("{LOG_FILE_PREFIX}_{timestamp}.log")
}

/// Installs the global logger.
///
/// With `console_to_stderr` every console line goes to stderr, leaving stdout
/// free for machine-readable output. Returns the log file path when a
/// `log_dir` was given.
pub fn setup_logging(
    verbose: bool,
    log_dir: Option<&Path>,
    console_to_stderr: bool,
) -> CliResult<Option<PathBuf>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let info_sink: fern::Output = if console_to_stderr {
        io::stderr().into()
    } else {
        io::stdout().into()
    };

    let console_info = fern::Dispatch::new()
        .filter(|metadata| metadata.level() > Level::Warn)
        .format(|out, message, _record| out.finish(format_args!("{message}")))
        .chain(info_sink);

    let console_problems = fern::Dispatch::new()
        .filter(|metadata| metadata.level() <= Level::Warn)
        .format(|out, message, record| {
            out.finish(format_args!("{}: {}", record.level(), message))
        })
        .chain(io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .level_for("ffmpeg_sidecar", LevelFilter::Warn)
        .chain(console_info)
        .chain(console_problems);

    let mut log_path = None;
    if let Some(dir) = log_dir {
        fs::create_dir_all(dir).cli_with_context(|| {
            format!("Failed to create log directory '{}'", dir.display())
        })?;
        let path = dir.join(log_file_name(&get_timestamp()));
        let file = fern::log_file(&path)
            .cli_with_context(|| format!("Failed to open log file '{}'", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {:<5} {}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        strip_ansi_escapes::strip_str(message.to_string())
                    ))
                })
                .chain(file),
        );
        log_path = Some(path);
    }

    dispatch
        .apply()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logging: {e}")))?;

    log::debug!("Logging initialized at level {level}");
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn log_file_named_after_run() {
        assert_eq!(
            log_file_name("20260101_120000"),
            "spritegen_run_20260101_120000.log"
        );
    }
}
