// spritegen-cli/src/config.rs
//
// Default paths for the `spritegen` command line, relative to the current
// working directory.

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Prefix of the log file written when `--log-dir` is given.
pub const LOG_FILE_PREFIX: &str = "spritegen_run";
