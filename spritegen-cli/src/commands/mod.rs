//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Batch sprite sheet generation over an input directory.
pub mod generate;

/// Dry-run view of the sampling plan for one video.
pub mod plan;
