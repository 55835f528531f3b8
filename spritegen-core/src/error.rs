// ============================================================================
// spritegen-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// Every fallible operation in spritegen-core returns `CoreResult<T>`. External
// tool failures carry the tool name and, where available, the exit status and
// diagnostic text emitted by the tool.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for {0}: {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("{tool} failed with {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Could not parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Unusable duration {0} for sampling")]
    InvalidDuration(f64),

    #[error("No video files found")]
    NoFilesFound,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

pub fn command_wait_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(tool.into(), err)
}

pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status,
        stderr: stderr.into(),
    }
}
